//! Envelope de resposta da API: `{error, message, data}`

use serde::{Deserialize, Serialize};

/// Resposta uniforme do servidor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Envelope de sucesso com dados
    pub fn ok(data: T) -> Self {
        Self {
            error: None,
            message: String::new(),
            data: Some(data),
        }
    }

    /// Envelope vazio (ex.: 204 No Content)
    pub fn empty() -> Self {
        Self {
            error: None,
            message: String::new(),
            data: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Mensagem a exibir quando o envelope representa um erro.
    ///
    /// `message` tem prioridade; `error` costuma ser um código curto.
    pub fn failure_message(&self) -> Option<String> {
        if !self.message.trim().is_empty() {
            return Some(self.message.clone());
        }
        self.error
            .as_ref()
            .filter(|e| !e.trim().is_empty())
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_envelope() {
        let json = r#"{"error": null, "message": "ok", "data": {"id": 1}}"#;
        let envelope: ApiResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(envelope.error.is_none());
        assert_eq!(envelope.message, "ok");
        assert_eq!(envelope.data.unwrap()["id"], 1);
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let envelope: ApiResponse<i32> = serde_json::from_str("{}").unwrap();
        assert_eq!(envelope, ApiResponse::empty());
    }

    #[test]
    fn test_failure_message_prefers_message() {
        let envelope: ApiResponse<()> = ApiResponse {
            error: Some("E_NAME".into()),
            message: "Nome inválido".into(),
            data: None,
        };
        assert_eq!(envelope.failure_message().as_deref(), Some("Nome inválido"));
    }

    #[test]
    fn test_failure_message_falls_back_to_error() {
        let envelope: ApiResponse<()> = ApiResponse {
            error: Some("Cidade em uso".into()),
            message: "  ".into(),
            data: None,
        };
        assert_eq!(envelope.failure_message().as_deref(), Some("Cidade em uso"));
    }
}
