use crate::components::form::{FormState, SubmitButton, TextField};
use leptos::prelude::*;
use schedula_common::forms::FILL_ALL_FIELDS;
use schedula_common::session::Credentials;
use std::future::Future;

#[component]
pub fn LoginForm<F, Fut>(on_submit: F) -> impl IntoView
where
    F: Fn(Credentials) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<(), String>> + 'static,
{
    let form = FormState::new(Credentials::default());
    // os dois campos compartilham a mesma mensagem
    let missing = Signal::derive(move || {
        form.errors
            .with(|e| (!e.is_empty()).then(|| FILL_ALL_FIELDS.to_string()))
    });

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.handle_submit(|v| Some(v.clone()), on_submit.clone());
    };

    view! {
        <form class="login-form" on:submit=on_form_submit>
            <TextField
                label="Usuário"
                name="username"
                value=form.text(|v| &v.username)
                on_input=move |s| form.values.update(|v| v.username = s)
                error=Signal::derive(|| None)
            />
            <TextField
                label="Senha"
                name="password"
                input_type="password"
                value=form.text(|v| &v.password)
                on_input=move |s| form.values.update(|v| v.password = s)
                error=missing
            />
            <SubmitButton state=form.submit label="Entrar" />
        </form>
    }
}
