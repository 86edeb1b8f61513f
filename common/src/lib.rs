//! Schedula Common Library
//!
//! Tipos, gateway de requisições e a estrutura das páginas CRUD
//! compartilhados pela CLI e pela Web (WASM).

pub mod constants;
pub mod controller;
pub mod envelope;
pub mod error;
pub mod filters;
pub mod form;
pub mod format;
pub mod forms;
pub mod item;
pub mod list;
pub mod modal;
pub mod policy;
pub mod request;
pub mod result;
pub mod routes;
pub mod select;
pub mod services;
pub mod session;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use controller::{PageController, PageState, PendingMutation};
pub use envelope::ApiResponse;
pub use error::{Error, Result};
pub use list::{ListState, ListView};
pub use policy::{is_allowed, Action};
pub use request::{Gateway, HttpRequest, Method, RawResponse, RequestDescriptor, Transport};
pub use result::{ApiResult, ErrorInfo, ErrorKind};
pub use session::{Access, Notifier, Session, ACCESS_DENIED};
pub use types::{Resource, ResourceKind};
