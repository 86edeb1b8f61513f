use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedulaError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Sessão não encontrada. Entre com `schedula login`")]
    NotLoggedIn,

    #[error("Falha no login: {0}")]
    Login(String),

    #[error("Item não encontrado: {0}")]
    NotFound(String),

    #[error("Erro no cliente HTTP: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Erro de entrada: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Erro de JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Erro de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] schedula_common::Error),
}

pub type Result<T> = std::result::Result<T, SchedulaError>;
