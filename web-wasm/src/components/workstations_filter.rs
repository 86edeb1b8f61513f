//! Filtros da lista de postos: regional + nome

use leptos::prelude::*;
use schedula_common::filters::WorkstationFilters;
use schedula_common::select::{find_option, SelectOption};

#[component]
pub fn WorkstationsFilter<F>(regionais: Signal<Vec<SelectOption>>, on_change: F) -> impl IntoView
where
    F: Fn(WorkstationFilters) + Copy + Send + Sync + 'static,
{
    let filters = RwSignal::new(WorkstationFilters::default());
    let emit = move |change: &dyn Fn(&mut WorkstationFilters)| {
        filters.update(|f| change(f));
        on_change(filters.get_untracked());
    };

    view! {
        <div class="filters">
            <select
                aria-label="Regional"
                on:change=move |ev| {
                    let picked = regionais.with(|o| find_option(o, &event_target_value(&ev)));
                    emit(&move |f| f.regional = picked.clone());
                }
            >
                <option value="">"Todas as regionais"</option>
                {move || regionais.get().into_iter().map(|o| view! {
                    <option value=o.value.clone()>{o.label}</option>
                }).collect_view()}
            </select>
            <input
                type="search"
                placeholder="Buscar por nome"
                prop:value=move || filters.with(|f| f.nome.clone())
                on:input=move |ev| {
                    let nome = event_target_value(&ev);
                    emit(&move |f| f.nome = nome.clone());
                }
            />
        </div>
    }
}
