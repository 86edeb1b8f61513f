//! Constantes de chamados: status e prioridade

use serde::{Deserialize, Serialize};

/// Status do chamado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChamadoStatus {
    Pending,
    InProgress,
    NotSolved,
    Outsourced,
    Solved,
}

impl ChamadoStatus {
    pub const ALL: [ChamadoStatus; 5] = [
        ChamadoStatus::Pending,
        ChamadoStatus::InProgress,
        ChamadoStatus::NotSolved,
        ChamadoStatus::Outsourced,
        ChamadoStatus::Solved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChamadoStatus::Pending => "pending",
            ChamadoStatus::InProgress => "in_progress",
            ChamadoStatus::NotSolved => "not_solved",
            ChamadoStatus::Outsourced => "outsourced",
            ChamadoStatus::Solved => "solved",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChamadoStatus::Pending => "Pendente",
            ChamadoStatus::InProgress => "Em andamento",
            ChamadoStatus::NotSolved => "Não resolvido",
            ChamadoStatus::Outsourced => "Terceirizado",
            ChamadoStatus::Solved => "Resolvido",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == key)
    }
}

/// Cor do selo de status; status ausente fica em vermelho
pub fn status_color(status: Option<ChamadoStatus>) -> &'static str {
    match status {
        Some(ChamadoStatus::Pending) => "yellow.500",
        Some(ChamadoStatus::InProgress) => "blue.400",
        Some(ChamadoStatus::NotSolved) => "gray.400",
        Some(ChamadoStatus::Solved) => "green.400",
        Some(ChamadoStatus::Outsourced) => "purple.300",
        None => "red",
    }
}

/// Prioridade do chamado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChamadoPriority {
    Low,
    Normal,
    High,
    Urgent,
}

impl ChamadoPriority {
    pub const ALL: [ChamadoPriority; 4] = [
        ChamadoPriority::Low,
        ChamadoPriority::Normal,
        ChamadoPriority::High,
        ChamadoPriority::Urgent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChamadoPriority::Low => "low",
            ChamadoPriority::Normal => "normal",
            ChamadoPriority::High => "high",
            ChamadoPriority::Urgent => "urgent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChamadoPriority::Low => "Baixa",
            ChamadoPriority::Normal => "Normal",
            ChamadoPriority::High => "Alta",
            ChamadoPriority::Urgent => "Urgente",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_keys() {
        let json = serde_json::to_string(&ChamadoStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        let parsed: ChamadoStatus = serde_json::from_str("\"not_solved\"").unwrap();
        assert_eq!(parsed, ChamadoStatus::NotSolved);
    }

    #[test]
    fn test_status_color() {
        assert_eq!(status_color(Some(ChamadoStatus::Solved)), "green.400");
        assert_eq!(status_color(None), "red");
    }

    #[test]
    fn test_from_key_roundtrip_labels() {
        assert_eq!(ChamadoStatus::from_key("outsourced").unwrap().label(), "Terceirizado");
        assert_eq!(ChamadoPriority::from_key("urgent").unwrap().label(), "Urgente");
        assert!(ChamadoPriority::from_key("critical").is_none());
    }
}
