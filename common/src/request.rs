//! Gateway de requisições
//!
//! `RequestDescriptor` descreve a chamada (método, caminho, corpo, query);
//! `Transport` executa o HTTP de fato (reqwest na CLI, fetch no navegador);
//! `Gateway::request` junta os dois e nunca falha para quem chama: tudo vira
//! `ApiResult`.

use crate::envelope::ApiResponse;
use crate::error::Error;
use crate::result::{ApiResult, ErrorInfo};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Método HTTP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descrição completa de uma chamada
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub query: Vec<(String, String)>,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            query: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Serializa o payload como corpo JSON
    pub fn json<T: Serialize>(mut self, payload: &T) -> crate::Result<Self> {
        self.body = Some(serde_json::to_value(payload)?);
        Ok(self)
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }
}

/// Requisição pronta para o transporte (URL absoluta, corpo serializado)
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub body: Option<String>,
    pub bearer: Option<String>,
}

/// Resposta crua do transporte
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executor HTTP.
///
/// Erros de rede/timeout devem ser devolvidos como `Error::Transport`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: &HttpRequest) -> crate::Result<RawResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    async fn send(&self, request: &HttpRequest) -> crate::Result<RawResponse> {
        (**self).send(request).await
    }
}

/// Gateway: resolve a URL, anexa o token da sessão e normaliza o resultado
#[derive(Debug, Clone)]
pub struct Gateway<T> {
    transport: T,
    base_url: String,
    token: Option<String>,
}

impl<T: Transport> Gateway<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL absoluta para um caminho da API
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Executa a chamada descrita. Nunca falha: erros viram `ApiResult::Error`.
    pub async fn request<D: DeserializeOwned>(
        &self,
        descriptor: &RequestDescriptor,
    ) -> ApiResult<ApiResponse<D>> {
        let request = HttpRequest {
            method: descriptor.method,
            url: self.url_for(&descriptor.path),
            query: descriptor.query.clone(),
            body: descriptor.body.as_ref().map(Value::to_string),
            bearer: self.token.clone(),
        };

        tracing::debug!(method = %request.method, url = %request.url, "dispatching request");

        let raw = match self.transport.send(&request).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!(error = %e, "transport failure");
                return ApiResult::error(ErrorInfo::transport(transport_message(e)));
            }
        };

        let result = decode_response(&raw);
        tracing::debug!(status = raw.status, success = result.is_success(), "request finished");
        result
    }
}

fn transport_message(error: Error) -> String {
    match error {
        Error::Transport(message) => message,
        other => other.to_string(),
    }
}

/// Converte a resposta crua em `ApiResult` seguindo o contrato do envelope
pub fn decode_response<D: DeserializeOwned>(raw: &RawResponse) -> ApiResult<ApiResponse<D>> {
    if !raw.is_success() {
        let message = serde_json::from_str::<ApiResponse<Value>>(&raw.body)
            .ok()
            .and_then(|envelope| envelope.failure_message());
        return match message {
            Some(message) => ApiResult::error(ErrorInfo::validation(message)),
            None => ApiResult::error(ErrorInfo::transport(format!(
                "Erro inesperado (HTTP {})",
                raw.status
            ))),
        };
    }

    if raw.body.trim().is_empty() {
        return ApiResult::success(ApiResponse::empty());
    }

    let envelope: ApiResponse<D> = match serde_json::from_str(&raw.body) {
        Ok(envelope) => envelope,
        Err(e) => {
            return ApiResult::error(ErrorInfo::transport(format!(
                "Resposta inválida do servidor: {}",
                e
            )))
        }
    };

    if envelope.error.is_some() {
        let message = envelope
            .failure_message()
            .unwrap_or_else(|| "Erro inesperado".to_string());
        return ApiResult::error(ErrorInfo::validation(message));
    }

    ApiResult::success(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ErrorKind;
    use crate::testing::ScriptedTransport;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_success_unwraps_envelope() {
        let raw = RawResponse::new(200, r#"{"error":null,"message":"","data":[1,2]}"#);
        let result: ApiResult<ApiResponse<Vec<i32>>> = decode_response(&raw);
        assert_eq!(result.value().unwrap().data, Some(vec![1, 2]));
    }

    #[test]
    fn test_envelope_error_maps_to_validation() {
        let raw = RawResponse::new(200, r#"{"error":"bad","message":"Nome inválido","data":null}"#);
        let result: ApiResult<ApiResponse<Value>> = decode_response(&raw);
        let error = result.error_info().unwrap();
        assert_eq!(error.message, "Nome inválido");
        assert_eq!(error.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_non_2xx_with_envelope_uses_its_message() {
        let raw = RawResponse::new(422, r#"{"error":"x","message":"Cidade já cadastrada"}"#);
        let result: ApiResult<ApiResponse<Value>> = decode_response(&raw);
        assert_eq!(result.error_info().unwrap().message, "Cidade já cadastrada");
    }

    #[test]
    fn test_non_2xx_without_envelope_is_transport_error() {
        let raw = RawResponse::new(502, "<html>Bad Gateway</html>");
        let result: ApiResult<ApiResponse<Value>> = decode_response(&raw);
        let error = result.error_info().unwrap();
        assert_eq!(error.kind, ErrorKind::Transport);
        assert!(error.message.contains("502"));
    }

    #[test]
    fn test_empty_body_is_empty_envelope() {
        let raw = RawResponse::new(204, "");
        let result: ApiResult<ApiResponse<Value>> = decode_response(&raw);
        assert_eq!(result.value().unwrap(), &ApiResponse::empty());
    }

    #[test]
    fn test_garbage_body_is_transport_error() {
        let raw = RawResponse::new(200, "not json");
        let result: ApiResult<ApiResponse<Value>> = decode_response(&raw);
        assert_eq!(result.error_info().unwrap().kind, ErrorKind::Transport);
    }

    #[test]
    fn test_gateway_builds_url_query_body_and_token() {
        let transport = ScriptedTransport::new();
        transport.push_ok(json!({"id": 3}));
        let gateway = Gateway::new(&transport, "http://api.local/").with_token(Some("tok".into()));

        let descriptor = RequestDescriptor::new(Method::Post, "/cities")
            .json(&json!({"name": "C"}))
            .unwrap()
            .query("regional", true);
        let result: ApiResult<ApiResponse<Value>> = block_on(gateway.request(&descriptor));
        assert!(result.is_success());

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, "http://api.local/cities");
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].query, vec![("regional".to_string(), "true".to_string())]);
        assert_eq!(sent[0].body.as_deref(), Some(r#"{"name":"C"}"#));
        assert_eq!(sent[0].bearer.as_deref(), Some("tok"));
    }

    #[test]
    fn test_gateway_maps_transport_failure() {
        let transport = ScriptedTransport::new();
        transport.push_failure("connection refused");
        let gateway = Gateway::new(&transport, "http://api.local");

        let result: ApiResult<ApiResponse<Value>> =
            block_on(gateway.request(&RequestDescriptor::get("/cities")));
        let error = result.error_info().unwrap();
        assert_eq!(error.kind, ErrorKind::Transport);
        assert_eq!(error.message, "connection refused");
    }
}
