//! Transporte em memória para testes

use crate::error::Error;
use crate::request::{HttpRequest, RawResponse, Transport};
use crate::session::{NoticeLevel, Notifier};
use serde::Serialize;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Devolve respostas roteirizadas em ordem e registra o que foi enviado
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<RawResponse, String>>>,
    sent: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_raw(&self, status: u16, body: impl Into<String>) {
        self.responses
            .borrow_mut()
            .push_back(Ok(RawResponse::new(status, body)));
    }

    /// Envelope de sucesso com `data`
    pub fn push_ok<T: Serialize>(&self, data: T) {
        let body = serde_json::json!({"error": null, "message": "", "data": data});
        self.push_raw(200, body.to_string());
    }

    /// Envelope de erro de negócio
    pub fn push_error(&self, message: &str) {
        let body = serde_json::json!({"error": "error", "message": message, "data": null});
        self.push_raw(400, body.to_string());
    }

    /// Falha de rede
    pub fn push_failure(&self, message: &str) {
        self.responses.borrow_mut().push_back(Err(message.to_string()));
    }

    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: &HttpRequest) -> crate::Result<RawResponse> {
        self.sent.borrow_mut().push(request.clone());
        match self.responses.borrow_mut().pop_front() {
            Some(Ok(raw)) => Ok(raw),
            Some(Err(message)) => Err(Error::Transport(message)),
            None => Err(Error::Transport("no scripted response".to_string())),
        }
    }
}

/// Notificador que guarda as mensagens
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    pub messages: Rc<RefCell<Vec<(NoticeLevel, String)>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> Vec<String> {
        self.by_level(NoticeLevel::Error)
    }

    pub fn successes(&self) -> Vec<String> {
        self.by_level(NoticeLevel::Success)
    }

    fn by_level(&self, level: NoticeLevel) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, text: &str) {
        self.messages
            .borrow_mut()
            .push((NoticeLevel::Success, text.to_string()));
    }

    fn error(&self, text: &str) {
        self.messages
            .borrow_mut()
            .push((NoticeLevel::Error, text.to_string()));
    }
}
