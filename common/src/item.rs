//! Linha de lista: título, descrição e slot de ações ligado ao item

use crate::policy::{is_allowed, Action};
use crate::session::Session;
use crate::types::Resource;

/// Ações disponíveis para uma linha, já filtradas pela política
#[derive(Debug, Clone, PartialEq)]
pub struct ItemActions<T> {
    pub item: T,
    pub can_edit: bool,
    pub can_delete: bool,
}

impl<R: Resource> ItemActions<R> {
    pub fn for_session(item: R, session: &Session) -> Self {
        Self::for_actions(item, session, &[Action::Edit, Action::Delete])
    }

    /// Apenas as ações que a página oferece, ainda filtradas pela política
    pub fn for_actions(item: R, session: &Session, offered: &[Action]) -> Self {
        let allowed = |action| offered.contains(&action) && is_allowed(R::KIND, action, session.access());
        Self {
            item,
            can_edit: allowed(Action::Edit),
            can_delete: allowed(Action::Delete),
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.can_edit && !self.can_delete
    }

    pub fn edit_label(&self) -> String {
        format!("Editar {}", self.item.display_name())
    }

    pub fn delete_label(&self) -> String {
        format!("Excluir {}", self.item.display_name())
    }

    /// Pergunta feita antes de excluir
    pub fn confirm_delete_message(&self) -> String {
        format!("Deseja realmente excluir \"{}\"?", self.item.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Access;
    use crate::types::{Chamado, Workstation};

    fn workstation() -> Workstation {
        Workstation {
            id: 1,
            name: "Posto Central".into(),
            city_id: 1,
            regional: false,
            regional_id: None,
            adsl_vpn: false,
            ip: "10.0.0.1".into(),
            link: "10MB".into(),
            phones: vec![],
        }
    }

    #[test]
    fn test_basic_sees_no_workstation_actions() {
        let actions = ItemActions::for_session(workstation(), &Session::new("Ana", Access::Basic));
        assert!(actions.is_empty());
    }

    #[test]
    fn test_manager_edits_but_does_not_delete() {
        let actions = ItemActions::for_session(workstation(), &Session::new("Ana", Access::Manager));
        assert!(actions.can_edit);
        assert!(!actions.can_delete);
        assert_eq!(actions.edit_label(), "Editar Posto Central");
    }

    #[test]
    fn test_offered_actions_limit_slot() {
        let chamado: Chamado = serde_json::from_value(serde_json::json!({
            "id": 1, "applicant_name": "João"
        }))
        .unwrap();
        let actions = ItemActions::for_actions(chamado, &Session::new("Ana", Access::Admin), &[Action::Edit]);
        assert!(actions.can_edit);
        assert!(!actions.can_delete);
    }
}
