//! Menu lateral

use leptos::prelude::*;
use schedula_common::routes::ROUTES;
use schedula_common::Session;

#[component]
pub fn Sidebar<N, S>(
    session: Signal<Option<Session>>,
    current: Signal<String>,
    on_navigate: N,
    on_sign_out: S,
) -> impl IntoView
where
    N: Fn(&'static str) + Copy + Send + Sync + 'static,
    S: Fn() + Send + Sync + 'static,
{
    let display_name = move || {
        session.with(|s| {
            s.as_ref()
                .map_or_else(|| "Username".to_string(), |s| s.display_name().to_string())
        })
    };

    let links = ROUTES
        .iter()
        .map(|route| {
            let path = route.path;
            view! {
                <li>
                    <a
                        href=path
                        class:active=move || current.with(|c| c == path)
                        on:click=move |ev| {
                            ev.prevent_default();
                            on_navigate(path);
                        }
                    >
                        <span class="icon">{route.icon}</span>
                        <span>{route.label}</span>
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <aside class="sidebar">
            <div class="brand">"Schedula"</div>
            <nav>
                <ul>{links}</ul>
            </nav>
            <div class="sidebar-footer">
                <span class="user-name">{display_name}</span>
                <button class="btn btn-link" on:click=move |_| on_sign_out()>
                    "Sair"
                </button>
            </div>
        </aside>
    }
}
