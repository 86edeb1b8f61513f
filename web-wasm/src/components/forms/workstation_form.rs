//! Posto de trabalho: selects de cidade/regional e lista dinâmica de telefones

use crate::components::form::{CheckboxField, FieldError, FormState, SelectField, SubmitButton, TextField};
use leptos::prelude::*;
use schedula_common::forms::{PhoneField, WorkstationFormValues};
use schedula_common::select::SelectOption;
use schedula_common::types::{Workstation, WorkstationPayload};
use std::future::Future;

#[component]
pub fn WorkstationForm<F, Fut>(
    default_values: Option<Workstation>,
    cities: Signal<Vec<SelectOption>>,
    regionais: Signal<Vec<SelectOption>>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(WorkstationPayload) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<(), String>> + 'static,
{
    let initial = default_values
        .as_ref()
        .map(|w| WorkstationFormValues::from_workstation(w, &cities.get_untracked(), &regionais.get_untracked()))
        .unwrap_or_default();
    let form = FormState::new(initial);
    let values = form.values;

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.handle_submit(WorkstationFormValues::to_payload, on_submit.clone());
    };

    let is_regional = Signal::derive(move || values.with(|v| v.regional));
    let is_adsl = Signal::derive(move || values.with(|v| v.adsl_vpn));
    let phone_count = move || values.with(|v| v.phones.len());

    view! {
        <form class="entity-form" on:submit=on_form_submit>
            <TextField
                label="Nome"
                name="name"
                value=form.text(|v| &v.name)
                on_input=move |s| values.update(|v| v.name = s)
                error=form.error("name")
            />
            <SelectField
                label="Cidade"
                name="city"
                options=cities
                value=Signal::derive(move || values.with(|v| v.city.clone()))
                on_change=move |o| values.update(|v| v.city = o)
                error=form.error("city")
            />
            <CheckboxField
                label="Regional"
                name="regional"
                checked=is_regional
                on_toggle=move |b| values.update(|v| v.regional = b)
            />
            <Show when=move || !is_regional.get()>
                <SelectField
                    label="Regional responsável"
                    name="regional_parent"
                    options=regionais
                    value=Signal::derive(move || values.with(|v| v.regional_parent.clone()))
                    on_change=move |o| values.update(|v| v.regional_parent = o)
                    error=form.error("regional_parent")
                />
            </Show>
            <CheckboxField
                label="ADSL/VPN"
                name="adsl_vpn"
                checked=is_adsl
                on_toggle=move |b| values.update(|v| v.adsl_vpn = b)
            />
            <Show when=move || !is_adsl.get()>
                <TextField
                    label="IP"
                    name="ip"
                    placeholder="0.0.0.0"
                    value=form.text(|v| &v.ip)
                    on_input=move |s| values.update(|v| v.ip = s)
                    error=form.error("ip")
                />
                <TextField
                    label="Link"
                    name="link"
                    value=form.text(|v| &v.link)
                    on_input=move |s| values.update(|v| v.link = s)
                    error=form.error("link")
                />
            </Show>

            <fieldset class="phones">
                <legend>"Telefones"</legend>
                <For
                    each=move || 0..phone_count()
                    key=|index| *index
                    children=move |index| {
                        let number = Signal::derive(move || {
                            values.with(|v| v.phones.get(index).map(|p| p.number.clone()).unwrap_or_default())
                        });
                        let error = Signal::derive(move || {
                            form.errors.with(|e| e.get(&format!("phones.{}.number", index)).map(str::to_string))
                        });
                        view! {
                            <div class="phone-row">
                                <input
                                    type="tel"
                                    placeholder="(00) 0000-0000"
                                    prop:value=move || number.get()
                                    on:input=move |ev| {
                                        let s = event_target_value(&ev);
                                        values.update(|v| {
                                            if let Some(phone) = v.phones.get_mut(index) {
                                                phone.number = s;
                                            }
                                        });
                                    }
                                />
                                <button
                                    type="button"
                                    class="btn btn-icon"
                                    aria-label="Remover telefone"
                                    on:click=move |_| values.update(|v| {
                                        if index < v.phones.len() {
                                            v.phones.remove(index);
                                        }
                                    })
                                >
                                    "−"
                                </button>
                                <FieldError error=error />
                            </div>
                        }
                    }
                />
                <button
                    type="button"
                    class="btn btn-secondary btn-small"
                    on:click=move |_| values.update(|v| v.phones.push(PhoneField::default()))
                >
                    "+ Telefone"
                </button>
            </fieldset>

            <SubmitButton state=form.submit />
        </form>
    }
}
