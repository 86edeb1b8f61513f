//! Postos de trabalho: filtros locais, nome da cidade e selos

use crate::components::forms::WorkstationForm;
use crate::components::item::Item;
use crate::components::list_view::ListView;
use crate::components::modal::Modal;
use crate::components::page_header::PageHeader;
use crate::components::toasts::ToastNotifier;
use crate::components::workstations_filter::WorkstationsFilter;
use crate::page::{load_options, PageHandle};
use leptos::prelude::*;
use schedula_common::filters::{apply_workstation_filters, WorkstationFilters};
use schedula_common::select::select_options;
use schedula_common::services;
use schedula_common::types::{City, ResourceKind, Workstation};
use schedula_common::{Action, Session};

const OFFERED: &[Action] = &[Action::Edit, Action::Delete];

#[component]
pub fn WorkstationsPage(session: Session, notifier: ToastNotifier) -> impl IntoView {
    let cities = load_options::<City>(&session, services::list(ResourceKind::City));
    let regionais = load_options::<Workstation>(&session, services::regional_workstations());
    let page = PageHandle::<Workstation>::new(session, notifier);
    let filters = RwSignal::new(WorkstationFilters::default());

    let city_options = Signal::derive(move || {
        cities.with(|c| select_options(Some(c.as_slice()), |c: &City| c.name.clone(), |c| c.id.to_string()))
    });
    let regional_options = Signal::derive(move || {
        regionais.with(|w| {
            select_options(Some(w.as_slice()), |w: &Workstation| w.name.clone(), |w| w.id.to_string())
        })
    });

    let all = page.items();
    let visible = Signal::derive(move || {
        all.get()
            .map(|items| filters.with(|f| apply_workstation_filters(&items, f)))
    });

    view! {
        <section class="page">
            <PageHeader
                title="Postos de Trabalho"
                busy=page.busy()
                on_refresh=move || page.refresh()
                create_label="Novo posto"
                can_create=page.can(Action::Create)
                on_create=move || page.open_create()
            />
            <WorkstationsFilter regionais=regional_options on_change=move |f| filters.set(f) />
            <ListView
                items=visible
                is_loading=page.busy()
                render_item=move |ws: Workstation| {
                    let city = cities.with(|c| ws.city_name(c).to_string());
                    let badges = ws
                        .badges()
                        .into_iter()
                        .map(|b| view! { <span class="badge">{b}</span> })
                        .collect_view();
                    let phones = ws.phones.join(" / ");
                    let title = view! {
                        <span>{ws.name.clone()}</span>
                        <span class="badges">{badges}</span>
                    }
                    .into_any();
                    view! {
                        <Item title=title actions=page.action_buttons(ws.clone(), OFFERED)>
                            <p>{city}</p>
                            <p class="muted">{phones}</p>
                        </Item>
                    }
                }
            />
            <Modal is_open=page.is_open() title=page.modal_title() on_close=move || page.cancel()>
                <WorkstationForm
                    default_values=page.editing_now()
                    cities=city_options
                    regionais=regional_options
                    on_submit=move |payload| page.submit(payload)
                />
            </Modal>
        </section>
    }
}
