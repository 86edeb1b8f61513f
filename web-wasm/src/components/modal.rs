//! Modal controlado pelo chamador

use leptos::prelude::*;
use schedula_common::modal::CLOSE_LABEL;

#[component]
pub fn Modal<F>(
    is_open: Signal<bool>,
    title: Signal<String>,
    on_close: F,
    children: ChildrenFn,
) -> impl IntoView
where
    F: Fn() + Clone + Send + Sync + 'static,
{
    view! {
        <Show when=move || is_open.get()>
            <div class="modal-overlay" on:click={
                let on_close = on_close.clone();
                move |_| on_close()
            }>
                <div class="modal" role="dialog" aria-modal="true" on:click=|ev| ev.stop_propagation()>
                    <header class="modal-header">
                        <h2>{move || title.get()}</h2>
                        <button class="btn btn-icon" aria-label=CLOSE_LABEL on:click={
                            let on_close = on_close.clone();
                            move |_| on_close()
                        }>
                            "✕"
                        </button>
                    </header>
                    <div class="modal-body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
