//! Título da página com recarregar e criar

use leptos::prelude::*;

#[component]
pub fn PageHeader<R, C>(
    #[prop(into)] title: String,
    busy: Signal<bool>,
    on_refresh: R,
    #[prop(optional, into)] create_label: Option<String>,
    /// Falso quando a política nega a criação
    can_create: bool,
    on_create: C,
) -> impl IntoView
where
    R: Fn() + Send + Sync + 'static,
    C: Fn() + Send + Sync + 'static,
{
    let create = can_create.then(|| {
        let label = create_label.unwrap_or_else(|| "Novo".to_string());
        view! {
            <button class="btn btn-primary" on:click=move |_| on_create()>
                {label}
            </button>
        }
    });

    view! {
        <div class="page-header">
            <h1>{title}</h1>
            <div class="page-actions">
                <button
                    class="btn btn-secondary"
                    aria-label="Recarregar"
                    disabled=move || busy.get()
                    on:click=move |_| on_refresh()
                >
                    <Show when=move || busy.get() fallback=|| "⟳ Recarregar">
                        <span class="spinner"></span>
                    </Show>
                </button>
                {create}
            </div>
        </div>
    }
}
