//! Lista genérica: carregando / vazio / itens na ordem do servidor

use leptos::prelude::*;
use schedula_common::list::{ListView as ListPolicy, EMPTY_MESSAGE, LOADING_MESSAGE};

#[component]
pub fn ListView<T, F, V>(
    items: Signal<Option<Vec<T>>>,
    is_loading: Signal<bool>,
    render_item: F,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    F: Fn(T) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    move || {
        let loading = is_loading.get();
        items.with(|items| match ListPolicy::state(items.as_deref(), loading) {
            // o conteúdo anterior continua visível durante a recarga
            ListPolicy::Loading { stale } => {
                let stale: Vec<V> = stale
                    .unwrap_or_default()
                    .iter()
                    .cloned()
                    .map(&render_item)
                    .collect();
                view! {
                    <div class="list-loading" aria-busy="true">
                        <span class="spinner"></span>
                        {LOADING_MESSAGE}
                    </div>
                    <ul class="list list-stale">{stale}</ul>
                }
                .into_any()
            }
            ListPolicy::Empty => view! { <p class="list-empty">{EMPTY_MESSAGE}</p> }.into_any(),
            ListPolicy::Items(items) => {
                let rows: Vec<V> = items.iter().cloned().map(&render_item).collect();
                view! { <ul class="list">{rows}</ul> }.into_any()
            }
        })
    }
}
