//! Raiz da aplicação: login, menu lateral e a página da rota atual

use crate::api::{self, session_store};
use crate::components::forms::LoginForm;
use crate::components::sidebar::Sidebar;
use crate::components::toasts::{ToastNotifier, Toasts};
use crate::pages::{
    CategoriesPage, ChamadosPage, CitiesPage, ProblemTypesPage, UsersPage, WorkstationsPage,
};
use leptos::prelude::*;
use schedula_common::routes::{find_route, LOGIN_PATH, ROUTES};
use schedula_common::services::sign_in;
use schedula_common::session::Credentials;
use schedula_common::{Notifier, Session};

/// Rota inicial: a do endereço, se conhecida, senão a primeira do menu
fn initial_route() -> String {
    let path = window().location().pathname().unwrap_or_default();
    match find_route(&path) {
        Some(route) => route.path.to_string(),
        None => ROUTES[0].path.to_string(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let session = RwSignal::new(session_store::load());
    let route = RwSignal::new(initial_route());
    let notifier = ToastNotifier::new();

    let on_login = move |credentials: Credentials| async move {
        let gateway = api::gateway(None);
        let signed = sign_in(&gateway, &credentials).await?;
        session_store::save(&signed);
        notifier.success(&format!("Bem-vindo, {}", signed.display_name()));
        session.try_set(Some(signed));
        route.try_set(ROUTES[0].path.to_string());
        Ok::<(), String>(())
    };

    let on_sign_out = move || {
        session_store::clear();
        session.set(None);
        route.set(LOGIN_PATH.to_string());
    };

    let current_page = move || {
        let Some(active) = session.get() else {
            return view! {
                <div class="login-page">
                    <h1>"Schedula"</h1>
                    <LoginForm on_submit=on_login />
                </div>
            }
            .into_any();
        };
        page_for(&route.get(), active, notifier)
    };

    view! {
        <div class="app">
            <Show when=move || session.with(Option::is_some)>
                <Sidebar
                    session=session.into()
                    current=route.into()
                    on_navigate=move |path| route.set(path.to_string())
                    on_sign_out=on_sign_out
                />
            </Show>
            <main class="content">{current_page}</main>
            <Toasts notifier=notifier />
        </div>
    }
}

fn page_for(path: &str, session: Session, notifier: ToastNotifier) -> AnyView {
    match path {
        "/workstation" => view! { <WorkstationsPage session=session notifier=notifier /> }.into_any(),
        "/cidades" => view! { <CitiesPage session=session notifier=notifier /> }.into_any(),
        "/categorias" => view! { <CategoriesPage session=session notifier=notifier /> }.into_any(),
        "/problemas" => view! { <ProblemTypesPage session=session notifier=notifier /> }.into_any(),
        "/usuarios" => view! { <UsersPage session=session notifier=notifier /> }.into_any(),
        _ => view! { <ChamadosPage session=session notifier=notifier /> }.into_any(),
    }
}
