use crate::components::forms::CategoriaForm;
use crate::components::item::Item;
use crate::components::list_view::ListView;
use crate::components::modal::Modal;
use crate::components::page_header::PageHeader;
use crate::components::toasts::ToastNotifier;
use crate::page::PageHandle;
use leptos::prelude::*;
use schedula_common::forms::CategoriaFormValues;
use schedula_common::types::{Category, CategoryPayload};
use schedula_common::{Action, Session};

const OFFERED: &[Action] = &[Action::Edit, Action::Delete];

#[component]
pub fn CategoriesPage(session: Session, notifier: ToastNotifier) -> impl IntoView {
    let page = PageHandle::<Category>::new(session, notifier);

    view! {
        <section class="page">
            <PageHeader
                title="Categorias"
                busy=page.busy()
                on_refresh=move || page.refresh()
                create_label="Nova categoria"
                can_create=page.can(Action::Create)
                on_create=move || page.open_create()
            />
            <ListView
                items=page.items()
                is_loading=page.busy()
                render_item=move |category: Category| {
                    let problems = category
                        .problem_types
                        .iter()
                        .map(|p| view! { <span class="badge">{p.name.clone()}</span> })
                        .collect_view();
                    view! {
                        <Item title=category.name.clone().into_any() actions=page.action_buttons(category.clone(), OFFERED)>
                            <p>{category.description.clone()}</p>
                            <div class="badges">{problems}</div>
                        </Item>
                    }
                }
            />
            <Modal is_open=page.is_open() title=page.modal_title() on_close=move || page.cancel()>
                <CategoriaForm
                    default_values=page.editing_now().as_ref().map(CategoriaFormValues::from)
                    on_submit=move |values: CategoriaFormValues| page.submit(CategoryPayload::from(values))
                />
            </Modal>
        </section>
    }
}
