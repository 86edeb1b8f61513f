//! Filtros da lista de postos de trabalho
//!
//! Efêmeros: recalculados a cada alteração do formulário e entregues ao pai.

use crate::select::SelectOption;
use crate::types::Workstation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkstationFilters {
    pub regional: Option<SelectOption>,
    pub nome: String,
}

/// Campos observados pelo filtro
pub const WORKSTATION_FIELDS: [&str; 2] = ["regional", "nome"];

impl WorkstationFilters {
    pub fn is_empty(&self) -> bool {
        self.regional.is_none() && self.nome.trim().is_empty()
    }

    /// A regional casa com o próprio posto regional ou com os postos ligados a ela
    pub fn matches(&self, workstation: &Workstation) -> bool {
        let regional_ok = match self.regional.as_ref().and_then(SelectOption::id) {
            Some(id) => workstation.id == id || workstation.regional_id == Some(id),
            None => true,
        };
        let nome = self.nome.trim().to_lowercase();
        let nome_ok = nome.is_empty() || workstation.name.to_lowercase().contains(&nome);
        regional_ok && nome_ok
    }
}

/// Mantém a ordem do servidor
pub fn apply_workstation_filters(items: &[Workstation], filters: &WorkstationFilters) -> Vec<Workstation> {
    items
        .iter()
        .filter(|w| filters.matches(w))
        .cloned()
        .collect()
}
