//! Edição de chamado. Problemas são pares categoria/problema; o select de
//! problema depende da categoria escolhida na mesma linha.

use crate::components::form::{FieldError, FormState, SelectField, SubmitButton, TextAreaField, TextField};
use leptos::prelude::*;
use schedula_common::forms::{
    chamado_to_form_values, form_values_to_payload, priority_options, status_options, ChamadoFormValues,
    ProblemFormValue,
};
use schedula_common::select::{find_option, select_options, SelectOption};
use schedula_common::types::{Category, Chamado, ChamadoPayload, ProblemType};
use std::future::Future;

/// Listas auxiliares carregadas pela página
#[derive(Clone, Copy)]
pub struct ChamadoFormOptions {
    pub workstations: Signal<Vec<SelectOption>>,
    pub cities: Signal<Vec<SelectOption>>,
    pub categories: Signal<Vec<Category>>,
}

impl ChamadoFormOptions {
    fn category_options(&self) -> Signal<Vec<SelectOption>> {
        let categories = self.categories;
        Signal::derive(move || {
            categories.with(|list| {
                select_options(Some(list.as_slice()), |c: &Category| c.name.clone(), |c| c.id.to_string())
            })
        })
    }

    fn problems_of(&self, category: Option<SelectOption>) -> Vec<SelectOption> {
        let Some(id) = category.as_ref().and_then(SelectOption::id) else {
            return Vec::new();
        };
        self.categories.with(|categories| {
            categories
                .iter()
                .find(|c| c.id == id)
                .map(|c| {
                    select_options(Some(c.problem_types.as_slice()), |p: &ProblemType| p.name.clone(), |p| {
                        p.id.to_string()
                    })
                })
                .unwrap_or_default()
        })
    }
}

#[component]
pub fn ChamadoForm<F, Fut>(default_values: Chamado, options: ChamadoFormOptions, on_submit: F) -> impl IntoView
where
    F: Fn(ChamadoPayload) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<(), String>> + 'static,
{
    let form = FormState::new(chamado_to_form_values(&default_values));
    let values = form.values;

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.handle_submit(|v: &ChamadoFormValues| Some(form_values_to_payload(v)), on_submit.clone());
    };

    let category_options = options.category_options();
    let problem_count = move || values.with(|v| v.problems.len());

    view! {
        <form class="entity-form" on:submit=on_form_submit>
            <TextField
                label="Solicitante"
                name="applicant_name"
                value=form.text(|v| &v.applicant_name)
                on_input=move |s| values.update(|v| v.applicant_name = s)
                error=form.error("applicant_name")
            />
            <TextField
                label="Telefone do solicitante"
                name="applicant_phone"
                input_type="tel"
                value=form.text(|v| &v.applicant_phone)
                on_input=move |s| values.update(|v| v.applicant_phone = s)
                error=form.error("applicant_phone")
            />
            <TextField
                label="Atendente"
                name="attendant_name"
                value=form.text(|v| &v.attendant_name)
                on_input=move |s| values.update(|v| v.attendant_name = s)
                error=form.error("attendant_name")
            />
            <SelectField
                label="Posto de trabalho"
                name="workstation"
                options=options.workstations
                value=Signal::derive(move || values.with(|v| v.workstation.clone()))
                on_change=move |o| values.update(|v| v.workstation = o)
                error=form.error("workstation")
            />
            <SelectField
                label="Cidade"
                name="city"
                options=options.cities
                value=Signal::derive(move || values.with(|v| v.city.clone()))
                on_change=move |o| values.update(|v| v.city = o)
                error=form.error("city")
            />
            <SelectField
                label="Status"
                name="status"
                options=Signal::stored(status_options())
                value=Signal::derive(move || values.with(|v| v.status.clone()))
                on_change=move |o| values.update(|v| v.status = o)
                error=form.error("status")
            />
            <SelectField
                label="Prioridade"
                name="priority"
                options=Signal::stored(priority_options())
                value=Signal::derive(move || values.with(|v| v.priority.clone()))
                on_change=move |o| values.update(|v| v.priority = o)
                error=form.error("priority")
            />
            <TextAreaField
                label="Descrição"
                name="description"
                value=form.text(|v| &v.description)
                on_input=move |s| values.update(|v| v.description = s)
                error=form.error("description")
            />

            <fieldset class="problems">
                <legend>"Problemas"</legend>
                <For
                    each=move || 0..problem_count()
                    key=|index| *index
                    children=move |index| {
                        let category = Signal::derive(move || {
                            values.with(|v| v.problems.get(index).and_then(|p| p.category.clone()))
                        });
                        let problem = Signal::derive(move || {
                            values.with(|v| v.problems.get(index).and_then(|p| p.problem.clone()))
                        });
                        let problem_options = Signal::derive(move || options.problems_of(category.get()));
                        view! {
                            <div class="problem-row">
                                <select
                                    aria-label="Categoria"
                                    prop:value=move || category.get().map(|o| o.value).unwrap_or_default()
                                    on:change=move |ev| {
                                        let picked = category_options.with(|o| find_option(o, &event_target_value(&ev)));
                                        values.update(|v| {
                                            if let Some(row) = v.problems.get_mut(index) {
                                                // outra categoria invalida o problema escolhido
                                                row.category = picked;
                                                row.problem = None;
                                            }
                                        });
                                    }
                                >
                                    <option value="">"Categoria..."</option>
                                    {move || category_options.get().into_iter().map(|o| view! {
                                        <option value=o.value.clone()>{o.label}</option>
                                    }).collect_view()}
                                </select>
                                <select
                                    aria-label="Problema"
                                    prop:value=move || problem.get().map(|o| o.value).unwrap_or_default()
                                    on:change=move |ev| {
                                        let picked = problem_options.with(|o| find_option(o, &event_target_value(&ev)));
                                        values.update(|v| {
                                            if let Some(row) = v.problems.get_mut(index) {
                                                row.problem = picked;
                                            }
                                        });
                                    }
                                >
                                    <option value="">"Problema..."</option>
                                    {move || problem_options.get().into_iter().map(|o| view! {
                                        <option value=o.value.clone()>{o.label}</option>
                                    }).collect_view()}
                                </select>
                                <button
                                    type="button"
                                    class="btn btn-icon"
                                    aria-label="Remover problema"
                                    on:click=move |_| values.update(|v| {
                                        if index < v.problems.len() {
                                            v.problems.remove(index);
                                        }
                                    })
                                >
                                    "−"
                                </button>
                            </div>
                        }
                    }
                />
                <FieldError error=form.error("problems") />
                <button
                    type="button"
                    class="btn btn-secondary btn-small"
                    on:click=move |_| values.update(|v| v.problems.push(ProblemFormValue::default()))
                >
                    "+ Problema"
                </button>
            </fieldset>

            <SubmitButton state=form.submit />
        </form>
    }
}
