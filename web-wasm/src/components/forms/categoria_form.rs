//! Nome + descrição. Usado por categorias e tipos de problema.

use crate::components::form::{FormState, SubmitButton, TextAreaField, TextField};
use leptos::prelude::*;
use schedula_common::forms::CategoriaFormValues;
use std::future::Future;

#[component]
pub fn CategoriaForm<F, Fut>(default_values: Option<CategoriaFormValues>, on_submit: F) -> impl IntoView
where
    F: Fn(CategoriaFormValues) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<(), String>> + 'static,
{
    let form = FormState::new(default_values.unwrap_or_default());

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.handle_submit(|v| Some(v.clone()), on_submit.clone());
    };

    view! {
        <form class="entity-form" on:submit=on_form_submit>
            <TextField
                label="Nome"
                name="name"
                value=form.text(|v| &v.name)
                on_input=move |s| form.values.update(|v| v.name = s)
                error=form.error("name")
            />
            <TextAreaField
                label="Descrição"
                name="description"
                value=form.text(|v| &v.description)
                on_input=move |s| form.values.update(|v| v.description = s)
                error=form.error("description")
            />
            <SubmitButton state=form.submit />
        </form>
    }
}
