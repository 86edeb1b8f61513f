//! Resultado discriminado de chamadas de rede
//!
//! Toda chamada ao gateway termina em `ApiResult<T>`: sucesso com o valor ou
//! erro com `ErrorInfo`. Nunca há os dois.

use serde::{Deserialize, Serialize};

/// Origem de um erro de requisição
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Rede, timeout ou corpo ilegível
    Transport,
    /// Rejeitado pelas regras de negócio do servidor
    Validation,
}

/// Informação de erro exibida ao usuário
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub message: String,
    pub kind: ErrorKind,
}

impl ErrorInfo {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ErrorKind::Transport,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ErrorKind::Validation,
        }
    }
}

impl std::fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// `{type: "success", value} | {type: "error", error}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ApiResult<T> {
    Success { value: T },
    Error { error: ErrorInfo },
}

impl<T> ApiResult<T> {
    pub fn success(value: T) -> Self {
        ApiResult::Success { value }
    }

    pub fn error(error: ErrorInfo) -> Self {
        ApiResult::Error { error }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success { .. })
    }

    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            ApiResult::Success { value } => Some(value),
            ApiResult::Error { .. } => None,
        }
    }

    pub fn error_info(&self) -> Option<&ErrorInfo> {
        match self {
            ApiResult::Success { .. } => None,
            ApiResult::Error { error } => Some(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResult<U> {
        match self {
            ApiResult::Success { value } => ApiResult::Success { value: f(value) },
            ApiResult::Error { error } => ApiResult::Error { error },
        }
    }

    pub fn into_result(self) -> Result<T, ErrorInfo> {
        match self {
            ApiResult::Success { value } => Ok(value),
            ApiResult::Error { error } => Err(error),
        }
    }
}

impl<T> From<Result<T, ErrorInfo>> for ApiResult<T> {
    fn from(result: Result<T, ErrorInfo>) -> Self {
        match result {
            Ok(value) => ApiResult::Success { value },
            Err(error) => ApiResult::Error { error },
        }
    }
}
