//! Avisos no terminal

use schedula_common::Notifier;

#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn success(&self, text: &str) {
        println!("✔ {}", text);
    }

    fn error(&self, text: &str) {
        eprintln!("✖ {}", text);
    }
}
