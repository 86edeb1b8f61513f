//! Sessão no sessionStorage

use gloo::storage::{SessionStorage, Storage};
use schedula_common::Session;

const SESSION_KEY: &str = "schedula.session";

pub fn load() -> Option<Session> {
    SessionStorage::get(SESSION_KEY).ok()
}

pub fn save(session: &Session) {
    if let Err(e) = SessionStorage::set(SESSION_KEY, session) {
        gloo::console::error!(format!("Falha ao salvar a sessão: {}", e));
    }
}

pub fn clear() {
    SessionStorage::delete(SESSION_KEY);
}
