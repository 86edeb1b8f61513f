use crate::components::form::{FormState, SelectField, SubmitButton, TextField};
use leptos::prelude::*;
use schedula_common::forms::{access_options, UserFormValues};
use schedula_common::types::{RegisterUserPayload, User};
use std::future::Future;

#[component]
pub fn UserForm<F, Fut>(default_values: Option<User>, on_submit: F) -> impl IntoView
where
    F: Fn(RegisterUserPayload) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<(), String>> + 'static,
{
    let form = FormState::new(default_values.as_ref().map(UserFormValues::from).unwrap_or_default());
    let values = form.values;
    let options = Signal::stored(access_options());

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.handle_submit(|v| Some(v.to_payload()), on_submit.clone());
    };

    view! {
        <form class="entity-form" on:submit=on_form_submit>
            <TextField
                label="Nome"
                name="name"
                value=form.text(|v| &v.name)
                on_input=move |s| values.update(|v| v.name = s)
                error=form.error("name")
            />
            <TextField
                label="Usuário"
                name="username"
                value=form.text(|v| &v.username)
                on_input=move |s| values.update(|v| v.username = s)
                error=form.error("username")
            />
            <TextField
                label="E-mail"
                name="email"
                input_type="email"
                value=form.text(|v| &v.email)
                on_input=move |s| values.update(|v| v.email = s)
                error=form.error("email")
            />
            <TextField
                label="Cargo"
                name="job_role"
                value=form.text(|v| &v.job_role)
                on_input=move |s| values.update(|v| v.job_role = s)
                error=form.error("job_role")
            />
            <SelectField
                label="Acesso"
                name="acess"
                options=options
                value=Signal::derive(move || values.with(|v| v.acess.clone()))
                on_change=move |o| values.update(|v| v.acess = o)
                error=form.error("acess")
            />
            <TextField
                label="Senha"
                name="password"
                input_type="password"
                value=form.text(|v| &v.password)
                on_input=move |s| values.update(|v| v.password = s)
                error=form.error("password")
            />
            <TextField
                label="Confirmar senha"
                name="confirm_password"
                input_type="password"
                value=form.text(|v| &v.confirm_password)
                on_input=move |s| values.update(|v| v.confirm_password = s)
                error=form.error("confirm_password")
            />
            <SubmitButton state=form.submit />
        </form>
    }
}
