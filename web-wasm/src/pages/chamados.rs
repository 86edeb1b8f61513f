//! Chamados: só edição. A abertura de chamados não passa por esta tela.

use crate::components::forms::{ChamadoForm, ChamadoFormOptions};
use crate::components::item::Item;
use crate::components::list_view::ListView;
use crate::components::modal::Modal;
use crate::components::page_header::PageHeader;
use crate::components::toasts::ToastNotifier;
use crate::page::{load_options, PageHandle};
use leptos::prelude::*;
use schedula_common::constants::ChamadoStatus;
use schedula_common::format::{format_date, DateFormat};
use schedula_common::select::select_options;
use schedula_common::services;
use schedula_common::types::{Category, Chamado, City, ResourceKind, Workstation};
use schedula_common::{Action, Session};

const OFFERED: &[Action] = &[Action::Edit];

#[component]
pub fn ChamadosPage(session: Session, notifier: ToastNotifier) -> impl IntoView {
    let workstations = load_options::<Workstation>(&session, services::list(ResourceKind::Workstation));
    let cities = load_options::<City>(&session, services::list(ResourceKind::City));
    let categories = load_options::<Category>(&session, services::list(ResourceKind::Category));
    let page = PageHandle::<Chamado>::new(session, notifier);

    let options = ChamadoFormOptions {
        workstations: Signal::derive(move || {
            workstations.with(|w| {
                select_options(Some(w.as_slice()), |w: &Workstation| w.name.clone(), |w| w.id.to_string())
            })
        }),
        cities: Signal::derive(move || {
            cities.with(|c| select_options(Some(c.as_slice()), |c: &City| c.name.clone(), |c| c.id.to_string()))
        }),
        categories: categories.into(),
    };

    let form = move || {
        page.editing_now().map(|chamado| {
            view! {
                <ChamadoForm
                    default_values=chamado
                    options=options
                    on_submit=move |payload| page.submit(payload)
                />
            }
        })
    };

    view! {
        <section class="page">
            <PageHeader
                title="Chamados"
                busy=page.busy()
                on_refresh=move || page.refresh()
                can_create=false
                on_create=|| {}
            />
            <ListView
                items=page.items()
                is_loading=page.busy()
                render_item=move |chamado: Chamado| {
                    let status = chamado.status.unwrap_or(ChamadoStatus::Pending).label();
                    let opened = format!(
                        "{} {}",
                        format_date(chamado.created_at.as_ref(), DateFormat::Date),
                        format_date(chamado.created_at.as_ref(), DateFormat::Time),
                    );
                    let attendant = if chamado.attendant_name.is_empty() {
                        "-".to_string()
                    } else {
                        chamado.attendant_name.clone()
                    };
                    let tags = chamado
                        .problem_tags()
                        .into_iter()
                        .map(|t| view! { <span class="badge">{t}</span> })
                        .collect_view();
                    view! {
                        <Item
                            title=format!("#{} {}", chamado.id, chamado.applicant_name).into_any()
                            actions=page.action_buttons(chamado.clone(), OFFERED)
                        >
                            <p>{opened} " | " {status} " | Atendente: " {attendant}</p>
                            <div class="badges">{tags}</div>
                        </Item>
                    }
                }
            />
            <Modal is_open=page.is_open() title=page.modal_title() on_close=move || page.cancel()>
                {form}
            </Modal>
        </section>
    }
}
