//! Campos de formulário e estado de envio

use leptos::prelude::*;
use leptos::task::spawn_local;
use schedula_common::form::{FieldErrors, SubmitState, Validate};
use schedula_common::select::{find_option, SelectOption};
use std::future::Future;

/// Valores, erros por campo e envio de um formulário
pub struct FormState<V: Send + Sync + 'static> {
    pub values: RwSignal<V>,
    pub errors: RwSignal<FieldErrors>,
    pub submit: RwSignal<SubmitState>,
}

impl<V: Send + Sync + 'static> Clone for FormState<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: Send + Sync + 'static> Copy for FormState<V> {}

impl<V: Validate + Clone + Send + Sync + 'static> FormState<V> {
    pub fn new(values: V) -> Self {
        Self {
            values: RwSignal::new(values),
            errors: RwSignal::new(FieldErrors::default()),
            submit: RwSignal::new(SubmitState::default()),
        }
    }

    /// Mensagem do campo
    pub fn error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    /// Leitura de um campo de texto
    pub fn text(&self, read: fn(&V) -> &String) -> Signal<String> {
        let values = self.values;
        Signal::derive(move || values.with(|v| read(v).clone()))
    }

    /// Valida e envia. Em erro os valores ficam como estão e a mensagem
    /// volta para o formulário.
    pub fn handle_submit<P, F, Fut>(&self, to_payload: impl FnOnce(&V) -> Option<P>, on_submit: F)
    where
        F: FnOnce(P) -> Fut,
        Fut: Future<Output = Result<(), String>> + 'static,
    {
        let values = self.values.get_untracked();
        let errors = values.validate();
        let has_errors = !errors.is_empty();
        self.errors.set(errors);
        if has_errors {
            return;
        }
        let Some(payload) = to_payload(&values) else {
            return;
        };
        if !self.submit.try_update(|s| s.begin()).unwrap_or(false) {
            return;
        }

        let submit = self.submit;
        let pending = on_submit(payload);
        spawn_local(async move {
            let outcome = pending.await;
            submit.try_update(|s| s.finish(outcome));
        });
    }
}

#[component]
pub fn TextField<F>(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    value: Signal<String>,
    on_input: F,
    error: Signal<Option<String>>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView
where
    F: Fn(String) + Send + Sync + 'static,
{
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    view! {
        <div class="form-group">
            <label for=name.clone()>{label}</label>
            <input
                type=input_type
                id=name.clone()
                name=name
                placeholder=placeholder.unwrap_or_default()
                class:invalid=move || error.with(Option::is_some)
                prop:value=move || value.get()
                on:input=move |ev| on_input(event_target_value(&ev))
            />
            <FieldError error=error />
        </div>
    }
}

#[component]
pub fn TextAreaField<F>(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    value: Signal<String>,
    on_input: F,
    error: Signal<Option<String>>,
) -> impl IntoView
where
    F: Fn(String) + Send + Sync + 'static,
{
    view! {
        <div class="form-group">
            <label for=name.clone()>{label}</label>
            <textarea
                id=name.clone()
                name=name
                prop:value=move || value.get()
                on:input=move |ev| on_input(event_target_value(&ev))
            />
            <FieldError error=error />
        </div>
    }
}

#[component]
pub fn SelectField<F>(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    options: Signal<Vec<SelectOption>>,
    value: Signal<Option<SelectOption>>,
    on_change: F,
    error: Signal<Option<String>>,
) -> impl IntoView
where
    F: Fn(Option<SelectOption>) + Send + Sync + 'static,
{
    let selected = move || value.with(|v| v.as_ref().map(|o| o.value.clone()).unwrap_or_default());
    view! {
        <div class="form-group">
            <label for=name.clone()>{label}</label>
            <select
                id=name.clone()
                name=name
                prop:value=selected
                on:change=move |ev| {
                    let picked = event_target_value(&ev);
                    on_change(options.with(|o| find_option(o, &picked)));
                }
            >
                <option value="">"Selecione..."</option>
                <For
                    each=move || options.get()
                    key=|option| option.value.clone()
                    children=move |option| {
                        let value = option.value.clone();
                        view! {
                            <option value=option.value selected=move || selected() == value>
                                {option.label}
                            </option>
                        }
                    }
                />
            </select>
            <FieldError error=error />
        </div>
    }
}

#[component]
pub fn CheckboxField<F>(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    checked: Signal<bool>,
    on_toggle: F,
) -> impl IntoView
where
    F: Fn(bool) + Send + Sync + 'static,
{
    view! {
        <div class="form-group form-check">
            <input
                type="checkbox"
                id=name.clone()
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle(event_target_checked(&ev))
            />
            <label for=name>{label}</label>
        </div>
    }
}

#[component]
pub fn FieldError(error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error
            .get()
            .map(|message| view! { <span class="field-error">{message}</span> })
    }
}

/// Botão de envio: desabilitado com spinner enquanto envia, erro do servidor abaixo
#[component]
pub fn SubmitButton(state: RwSignal<SubmitState>, #[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Salvar".to_string());
    let busy = move || state.with(|s| s.is_submitting);
    view! {
        <div class="form-actions">
            <button type="submit" class="btn btn-primary" disabled=busy>
                <Show when=busy fallback=move || label.clone()>
                    <span class="spinner"></span>
                    "Salvando..."
                </Show>
            </button>
            {move || state.with(|s| s.error.clone()).map(|message| view! { <p class="form-error">{message}</p> })}
        </div>
    }
}
