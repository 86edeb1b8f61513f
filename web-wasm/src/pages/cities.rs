use crate::components::forms::CityForm;
use crate::components::item::Item;
use crate::components::list_view::ListView;
use crate::components::modal::Modal;
use crate::components::page_header::PageHeader;
use crate::components::toasts::ToastNotifier;
use crate::page::PageHandle;
use leptos::prelude::*;
use schedula_common::types::City;
use schedula_common::{Action, Session};

const OFFERED: &[Action] = &[Action::Edit, Action::Delete];

#[component]
pub fn CitiesPage(session: Session, notifier: ToastNotifier) -> impl IntoView {
    let page = PageHandle::<City>::new(session, notifier);

    view! {
        <section class="page">
            <PageHeader
                title="Cidades"
                busy=page.busy()
                on_refresh=move || page.refresh()
                create_label="Nova cidade"
                can_create=page.can(Action::Create)
                on_create=move || page.open_create()
            />
            <ListView
                items=page.items()
                is_loading=page.busy()
                render_item=move |city: City| {
                    view! {
                        <Item title=city.name.clone().into_any() actions=page.action_buttons(city.clone(), OFFERED)>
                            <p class="muted">{format!("#{}", city.id)}</p>
                        </Item>
                    }
                }
            />
            <Modal is_open=page.is_open() title=page.modal_title() on_close=move || page.cancel()>
                <CityForm default_values=page.editing_now() on_submit=move |payload| page.submit(payload) />
            </Modal>
        </section>
    }
}
