//! Testes de erros
//!
//! Mensagens e conversões de SchedulaError

use schedula::config::Config;
use schedula::error::SchedulaError;

/// Display de todas as variantes de texto
#[test]
fn test_error_display() {
    let errors = vec![
        SchedulaError::Config("teste".to_string()),
        SchedulaError::NotLoggedIn,
        SchedulaError::Login("Senha incorreta".to_string()),
        SchedulaError::NotFound("Cidade 9".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "mensagem vazia: {:?}", err);
    }
}

/// Sem sessão a mensagem indica o login
#[test]
fn test_not_logged_in_message() {
    let display = SchedulaError::NotLoggedIn.to_string();
    assert!(display.contains("schedula login"));

    let config = Config::default();
    assert!(matches!(config.session(), Err(SchedulaError::NotLoggedIn)));
}

/// Conversão de erro de E/S
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: SchedulaError = io_err.into();

    assert!(matches!(err, SchedulaError::Io(_)));
    assert!(err.to_string().contains("E/S"));
}

/// Conversão de erro de JSON
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: SchedulaError = json_err.into();

    assert!(matches!(err, SchedulaError::JsonParse(_)));
}

/// Erro da biblioteca comum é transparente
#[test]
fn test_common_error_transparent() {
    let common_err = schedula_common::Error::Transport("conexão recusada".to_string());
    let err: SchedulaError = common_err.into();

    assert!(matches!(err, SchedulaError::Common(_)));
    assert!(err.to_string().contains("conexão recusada"));
}
