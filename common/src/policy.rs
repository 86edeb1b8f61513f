//! Tabela declarativa de permissões `(recurso, ação, papel) -> permitido`
//!
//! Recurso/ação sem regra na tabela é liberado para todos os papéis.

use crate::session::Access;
use crate::types::ResourceKind;

/// Ação sujeita a permissão
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    Edit,
    Delete,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Create => "criar",
            Action::Edit => "editar",
            Action::Delete => "excluir",
        }
    }
}

/// Regra: papéis autorizados para a ação no recurso
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub resource: ResourceKind,
    pub action: Action,
    pub allowed: &'static [Access],
}

const STAFF: &[Access] = &[Access::Manager, Access::Admin];
const ADMIN_ONLY: &[Access] = &[Access::Admin];
const NOBODY: &[Access] = &[];

pub const POLICY: &[Rule] = &[
    Rule {
        resource: ResourceKind::Workstation,
        action: Action::Create,
        allowed: STAFF,
    },
    Rule {
        resource: ResourceKind::Workstation,
        action: Action::Edit,
        allowed: STAFF,
    },
    Rule {
        resource: ResourceKind::Workstation,
        action: Action::Delete,
        allowed: ADMIN_ONLY,
    },
    Rule {
        resource: ResourceKind::Chamado,
        action: Action::Edit,
        allowed: STAFF,
    },
    Rule {
        resource: ResourceKind::Chamado,
        action: Action::Delete,
        allowed: NOBODY,
    },
];

/// Consulta a tabela
pub fn is_allowed(resource: ResourceKind, action: Action, access: Access) -> bool {
    POLICY
        .iter()
        .find(|rule| rule.resource == resource && rule.action == action)
        .map_or(true, |rule| rule.allowed.contains(&access))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workstation_rules() {
        let ws = ResourceKind::Workstation;
        assert!(!is_allowed(ws, Action::Edit, Access::Basic));
        assert!(is_allowed(ws, Action::Edit, Access::Manager));
        assert!(!is_allowed(ws, Action::Delete, Access::Manager));
        assert!(is_allowed(ws, Action::Delete, Access::Admin));
        assert!(!is_allowed(ws, Action::Create, Access::Basic));
    }

    #[test]
    fn test_basic_cannot_edit_chamados() {
        assert!(!is_allowed(ResourceKind::Chamado, Action::Edit, Access::Basic));
        assert!(is_allowed(ResourceKind::Chamado, Action::Edit, Access::Admin));
        assert!(is_allowed(ResourceKind::Chamado, Action::Create, Access::Basic));
    }

    #[test]
    fn test_chamados_have_no_delete() {
        for access in Access::ALL {
            assert!(!is_allowed(ResourceKind::Chamado, Action::Delete, access));
        }
    }

    #[test]
    fn test_unlisted_resources_are_open() {
        for access in Access::ALL {
            assert!(is_allowed(ResourceKind::City, Action::Delete, access));
            assert!(is_allowed(ResourceKind::Category, Action::Edit, access));
        }
    }
}
