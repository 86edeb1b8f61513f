//! Estado da lista de um recurso e política de exibição
//!
//! `ListState` é o cache local da página; `ListView` decide o que mostrar
//! (carregando / vazio / itens) sem conhecer o formato da entidade.

use crate::envelope::ApiResponse;
use crate::result::{ApiResult, ErrorInfo};
use crate::types::Resource;

pub const LOADING_MESSAGE: &str = "Carregando...";
pub const EMPTY_MESSAGE: &str = "Nenhum item encontrado";

/// Cache da lista de uma página
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub data: Option<Vec<T>>,
    pub is_loading: bool,
    pub is_validating: bool,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: false,
            is_validating: false,
        }
    }
}

impl<T> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Início de uma busca. `is_validating` indica que há dados antigos na tela.
    pub fn begin_fetch(&mut self) {
        self.is_loading = true;
        self.is_validating = self.data.is_some();
    }

    /// Fim de uma busca. Em erro os dados antigos são mantidos.
    pub fn finish_fetch(&mut self, result: ApiResult<ApiResponse<Vec<T>>>) -> Option<ErrorInfo> {
        self.is_loading = false;
        self.is_validating = false;
        match result {
            ApiResult::Success { value } => {
                self.data = Some(value.data.unwrap_or_default());
                None
            }
            ApiResult::Error { error } => Some(error),
        }
    }

    /// Substitui o cache inteiro (última escrita vence)
    pub fn set_data(&mut self, data: Vec<T>) {
        self.data = Some(data);
    }

    pub fn busy(&self) -> bool {
        self.is_loading || self.is_validating
    }

    pub fn items(&self) -> &[T] {
        self.data.as_deref().unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    pub fn view(&self) -> ListView<'_, T> {
        ListView::state(self.data.as_deref(), self.busy())
    }
}

impl<R: Resource> ListState<R> {
    pub fn find(&self, key: &R::Key) -> Option<&R> {
        self.items().iter().find(|item| &item.key() == key)
    }

    pub fn append(&mut self, entity: R) {
        self.data.get_or_insert_with(Vec::new).push(entity);
    }

    /// Troca a entrada com a mesma chave. Devolve `false` se não existia.
    pub fn replace(&mut self, key: &R::Key, entity: R) -> bool {
        let Some(items) = self.data.as_mut() else {
            return false;
        };
        match items.iter_mut().find(|item| &item.key() == key) {
            Some(slot) => {
                *slot = entity;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, key: &R::Key) -> Option<R> {
        let items = self.data.as_mut()?;
        let index = items.iter().position(|item| &item.key() == key)?;
        Some(items.remove(index))
    }
}

/// O que a lista deve exibir
#[derive(Debug, PartialEq)]
pub enum ListView<'a, T> {
    /// Carregamento tem precedência; `stale` guarda o conteúdo anterior
    Loading { stale: Option<&'a [T]> },
    Empty,
    Items(&'a [T]),
}

impl<'a, T> ListView<'a, T> {
    pub fn state(items: Option<&'a [T]>, is_loading: bool) -> Self {
        if is_loading {
            return ListView::Loading {
                stale: items.filter(|i| !i.is_empty()),
            };
        }
        match items {
            Some(items) if !items.is_empty() => ListView::Items(items),
            _ => ListView::Empty,
        }
    }

    /// Renderiza na ordem recebida do servidor
    pub fn render<N>(
        &self,
        mut render_item: impl FnMut(&T) -> N,
        loading: impl FnOnce() -> N,
        empty: impl FnOnce() -> N,
    ) -> Vec<N> {
        match self {
            ListView::Loading { .. } => vec![loading()],
            ListView::Empty => vec![empty()],
            ListView::Items(items) => items.iter().map(&mut render_item).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::City;

    fn city(id: i64, name: &str) -> City {
        City {
            id,
            name: name.to_string(),
        }
    }

    fn loaded(items: Vec<City>) -> ListState<City> {
        let mut state = ListState::new();
        state.set_data(items);
        state
    }

    #[test]
    fn test_fetch_cycle_sets_and_clears_loading() {
        let mut state: ListState<City> = ListState::new();
        state.begin_fetch();
        assert!(state.is_loading);
        assert!(!state.is_validating);

        let error = state.finish_fetch(ApiResult::success(ApiResponse::ok(vec![city(1, "A")])));
        assert!(error.is_none());
        assert!(!state.is_loading);
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_refetch_marks_validating() {
        let mut state = loaded(vec![city(1, "A")]);
        state.begin_fetch();
        assert!(state.is_validating);
    }

    #[test]
    fn test_fetch_without_data_yields_empty_list() {
        let mut state: ListState<City> = ListState::new();
        state.begin_fetch();
        state.finish_fetch(ApiResult::success(ApiResponse::empty()));
        assert_eq!(state.data, Some(vec![]));
    }

    #[test]
    fn test_failed_fetch_keeps_stale_data() {
        let mut state = loaded(vec![city(1, "A")]);
        state.begin_fetch();
        let error = state.finish_fetch(ApiResult::error(ErrorInfo::transport("offline")));
        assert_eq!(error.unwrap().message, "offline");
        assert_eq!(state.len(), 1);
        assert!(!state.busy());
    }

    #[test]
    fn test_replace_only_touches_matching_key() {
        let mut state = loaded(vec![city(1, "A"), city(2, "B")]);
        assert!(state.replace(&2, city(2, "B2")));
        assert_eq!(state.items(), &[city(1, "A"), city(2, "B2")]);
        assert!(!state.replace(&9, city(9, "Z")));
    }

    #[test]
    fn test_remove_by_key() {
        let mut state = loaded(vec![city(1, "A"), city(2, "B")]);
        assert_eq!(state.remove(&1), Some(city(1, "A")));
        assert_eq!(state.items(), &[city(2, "B")]);
        assert!(state.remove(&1).is_none());
    }

    #[test]
    fn test_view_loading_wins_over_items() {
        let items = vec![city(1, "A")];
        let view = ListView::state(Some(items.as_slice()), true);
        assert_eq!(view, ListView::Loading { stale: Some(items.as_slice()) });
    }

    #[test]
    fn test_view_empty_and_items() {
        assert_eq!(ListView::<City>::state(None, false), ListView::Empty);
        assert_eq!(ListView::<City>::state(Some(&[][..]), false), ListView::Empty);

        let items = vec![city(2, "B"), city(1, "A")];
        let rendered = ListView::state(Some(items.as_slice()), false).render(
            |c| c.name.clone(),
            || LOADING_MESSAGE.to_string(),
            || EMPTY_MESSAGE.to_string(),
        );
        assert_eq!(rendered, vec!["B", "A"]);
    }
}
