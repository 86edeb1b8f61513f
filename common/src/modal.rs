//! Casca do modal: título e visibilidade controlados por quem o abre

use crate::controller::PageState;
use crate::types::Resource;

pub const CLOSE_LABEL: &str = "Fechar";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalShell {
    pub title: String,
    pub is_open: bool,
}

impl ModalShell {
    pub fn new(title: impl Into<String>, is_open: bool) -> Self {
        Self {
            title: title.into(),
            is_open,
        }
    }

    pub fn for_page<R: Resource>(state: &PageState<R>) -> Self {
        Self::new(state.modal_title(), state.is_open())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::User;

    #[test]
    fn test_shell_follows_page_state() {
        let closed = ModalShell::for_page::<User>(&PageState::Idle);
        assert!(!closed.is_open);

        let creating = ModalShell::for_page::<User>(&PageState::Creating);
        assert!(creating.is_open);
        assert_eq!(creating.title, "Novo Usuário");
    }
}
