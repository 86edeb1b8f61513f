use crate::components::forms::UserForm;
use crate::components::item::Item;
use crate::components::list_view::ListView;
use crate::components::modal::Modal;
use crate::components::page_header::PageHeader;
use crate::components::toasts::ToastNotifier;
use crate::page::PageHandle;
use leptos::prelude::*;
use schedula_common::types::User;
use schedula_common::{Action, Session};

const OFFERED: &[Action] = &[Action::Edit, Action::Delete];

#[component]
pub fn UsersPage(session: Session, notifier: ToastNotifier) -> impl IntoView {
    let page = PageHandle::<User>::new(session, notifier);

    view! {
        <section class="page">
            <PageHeader
                title="Usuários"
                busy=page.busy()
                on_refresh=move || page.refresh()
                create_label="Novo usuário"
                can_create=page.can(Action::Create)
                on_create=move || page.open_create()
            />
            <ListView
                items=page.items()
                is_loading=page.busy()
                render_item=move |user: User| {
                    let status = if user.active { "Ativo" } else { "Inativo" };
                    view! {
                        <Item title=user.name.clone().into_any() actions=page.action_buttons(user.clone(), OFFERED)>
                            <p>{format!("{} <{}>", user.username, user.email)}</p>
                            <div class="badges">
                                <span class="badge">{user.acess.label()}</span>
                                <span class="badge">{user.job_role.clone()}</span>
                                <span class="badge">{status}</span>
                            </div>
                        </Item>
                    }
                }
            />
            <Modal is_open=page.is_open() title=page.modal_title() on_close=move || page.cancel()>
                <UserForm default_values=page.editing_now() on_submit=move |payload| page.submit(payload) />
            </Modal>
        </section>
    }
}
