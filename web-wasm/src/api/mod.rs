//! Acesso à API

pub mod fetch;
pub mod session_store;

pub use fetch::{gateway, FetchTransport};
