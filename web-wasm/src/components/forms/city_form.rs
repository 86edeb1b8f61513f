use crate::components::form::{FormState, SubmitButton, TextField};
use leptos::prelude::*;
use schedula_common::forms::CityFormValues;
use schedula_common::types::{City, CityPayload};
use std::future::Future;

#[component]
pub fn CityForm<F, Fut>(default_values: Option<City>, on_submit: F) -> impl IntoView
where
    F: Fn(CityPayload) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<(), String>> + 'static,
{
    let form = FormState::new(default_values.as_ref().map(CityFormValues::from).unwrap_or_default());

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.handle_submit(|v| Some(CityPayload::from(v.clone())), on_submit.clone());
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
            <SubmitButton state=form.submit />
        </form>
    }
}
