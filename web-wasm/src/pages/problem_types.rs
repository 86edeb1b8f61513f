use crate::components::forms::CategoriaForm;
use crate::components::item::Item;
use crate::components::list_view::ListView;
use crate::components::modal::Modal;
use crate::components::page_header::PageHeader;
use crate::components::toasts::ToastNotifier;
use crate::page::PageHandle;
use leptos::prelude::*;
use schedula_common::forms::CategoriaFormValues;
use schedula_common::types::{ProblemType, ProblemTypePayload};
use schedula_common::{Action, Session};

const OFFERED: &[Action] = &[Action::Edit, Action::Delete];

#[component]
pub fn ProblemTypesPage(session: Session, notifier: ToastNotifier) -> impl IntoView {
    let page = PageHandle::<ProblemType>::new(session, notifier);

    view! {
        <section class="page">
            <PageHeader
                title="Problemas"
                busy=page.busy()
                on_refresh=move || page.refresh()
                create_label="Novo problema"
                can_create=page.can(Action::Create)
                on_create=move || page.open_create()
            />
            <ListView
                items=page.items()
                is_loading=page.busy()
                render_item=move |problem: ProblemType| {
                    view! {
                        <Item title=problem.name.clone().into_any() actions=page.action_buttons(problem.clone(), OFFERED)>
                            <p>{problem.description.clone()}</p>
                        </Item>
                    }
                }
            />
            <Modal is_open=page.is_open() title=page.modal_title() on_close=move || page.cancel()>
                <CategoriaForm
                    default_values=page.editing_now().as_ref().map(CategoriaFormValues::from)
                    on_submit=move |values: CategoriaFormValues| page.submit(ProblemTypePayload::from(values))
                />
            </Modal>
        </section>
    }
}
