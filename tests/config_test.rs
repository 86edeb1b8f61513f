//! Testes de configuração

use schedula::config::{Config, API_URL_ENV, DEFAULT_API_URL};
use schedula_common::session::Access;
use schedula_common::Session;
use tempfile::tempdir;

/// Arquivo ausente usa os padrões
#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).expect("load failed");

    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.timeout_seconds, 30);
    assert!(config.session.is_none());
}

/// Salvar e recarregar mantém a sessão
#[test]
fn test_save_and_load_session() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("schedula").join("config.json");

    let mut session = Session::new("Ana", Access::Manager);
    session.token = Some("abc".into());
    let config = Config {
        api_url: "http://api.local".into(),
        timeout_seconds: 5,
        session: Some(session.clone()),
    };
    config.save_to(&path).expect("save failed");

    let loaded = Config::load_from(&path).expect("load failed");
    assert_eq!(loaded, config);
    assert_eq!(loaded.session().unwrap().access(), Access::Manager);
}

/// Campos ausentes no arquivo recebem o padrão
#[test]
fn test_partial_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"api_url": "http://outro"}"#).unwrap();

    let loaded = Config::load_from(&path).expect("load failed");
    assert_eq!(loaded.api_url, "http://outro");
    assert_eq!(loaded.timeout_seconds, 30);
}

/// Variável de ambiente tem prioridade sobre o arquivo
#[test]
fn test_env_overrides_api_url() {
    let config = Config::default();
    std::env::set_var(API_URL_ENV, "http://env.local");
    assert_eq!(config.api_url(), "http://env.local");
    std::env::remove_var(API_URL_ENV);
    assert_eq!(config.api_url(), DEFAULT_API_URL);
}
