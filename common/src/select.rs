//! Opções de select

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl ToString) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
        }
    }

    /// Valor numérico (ids)
    pub fn id(&self) -> Option<i64> {
        self.value.parse().ok()
    }
}

/// Monta opções a partir de uma lista possivelmente ainda não carregada
pub fn select_options<T, L, V>(items: Option<&[T]>, label: L, value: V) -> Vec<SelectOption>
where
    L: Fn(&T) -> String,
    V: Fn(&T) -> String,
{
    items
        .unwrap_or_default()
        .iter()
        .map(|item| SelectOption {
            label: label(item),
            value: value(item),
        })
        .collect()
}

/// Opção cujo valor é `value`
pub fn find_option(options: &[SelectOption], value: &str) -> Option<SelectOption> {
    options.iter().find(|o| o.value == value).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::City;

    #[test]
    fn test_select_options_from_cities() {
        let cities = vec![
            City { id: 1, name: "Goiânia".into() },
            City { id: 2, name: "Anápolis".into() },
        ];
        let options = select_options(Some(cities.as_slice()), |c| c.name.clone(), |c| c.id.to_string());
        assert_eq!(options[1], SelectOption::new("Anápolis", 2));
        assert_eq!(options[1].id(), Some(2));
    }

    #[test]
    fn test_select_options_not_loaded() {
        let options = select_options::<City, _, _>(None, |c| c.name.clone(), |c| c.id.to_string());
        assert!(options.is_empty());
    }
}
