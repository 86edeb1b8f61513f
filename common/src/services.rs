//! Descritores de chamada por recurso

use crate::form::Validate;
use crate::forms::FILL_ALL_FIELDS;
use crate::request::{Gateway, Method, RequestDescriptor, Transport};
use crate::session::{Credentials, LoginData, Session};
use crate::types::{Resource, ResourceKind};
use crate::Result;

pub fn list(kind: ResourceKind) -> RequestDescriptor {
    RequestDescriptor::get(kind.path())
}

/// `GET /workstations?regional=true`
pub fn regional_workstations() -> RequestDescriptor {
    list(ResourceKind::Workstation).query("regional", true)
}

pub fn create<R: Resource>(payload: &R::Payload) -> Result<RequestDescriptor> {
    RequestDescriptor::new(Method::Post, R::KIND.path()).json(payload)
}

pub fn update<R: Resource>(key: &R::Key, payload: &R::Payload) -> Result<RequestDescriptor> {
    RequestDescriptor::new(Method::Put, item_path(R::KIND, key)).json(payload)
}

pub fn delete<R: Resource>(key: &R::Key) -> RequestDescriptor {
    RequestDescriptor::delete(item_path(R::KIND, key))
}

pub fn login(credentials: &Credentials) -> Result<RequestDescriptor> {
    RequestDescriptor::new(Method::Post, "/login").json(credentials)
}

/// Troca as credenciais por uma sessão. Erros voltam como mensagem para o formulário.
pub async fn sign_in<T: Transport>(
    gateway: &Gateway<T>,
    credentials: &Credentials,
) -> std::result::Result<Session, String> {
    if !credentials.validate().is_empty() {
        return Err(FILL_ALL_FIELDS.to_string());
    }
    let request = login(credentials).map_err(|e| e.to_string())?;
    let response = gateway
        .request::<LoginData>(&request)
        .await
        .into_result()
        .map_err(|e| e.message)?;
    response
        .data
        .map(Session::from)
        .ok_or_else(|| "Resposta de login sem sessão".to_string())
}

fn item_path(kind: ResourceKind, key: &impl std::fmt::Display) -> String {
    format!("{}/{}", kind.path(), urlencoding::encode(&key.to_string()))
}
