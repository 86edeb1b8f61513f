//! Linha da lista e slot de ações

use leptos::prelude::*;
use schedula_common::item::ItemActions as Actions;
use schedula_common::Resource;

/// `title` e o corpo aceitam qualquer conteúdo renderizado
#[component]
pub fn Item(
    title: AnyView,
    #[prop(optional)] actions: Option<AnyView>,
    children: Children,
) -> impl IntoView {
    view! {
        <li class="item">
            <div class="item-body">
                <h3 class="item-title">{title}</h3>
                <div class="item-description">{children()}</div>
            </div>
            <div class="item-actions">{actions}</div>
        </li>
    }
}

/// Botões de editar/excluir já filtrados pela política.
/// Excluir pede confirmação antes de chamar `on_delete`.
#[component]
pub fn ItemActions<R, E, D>(actions: Actions<R>, on_edit: E, on_delete: D) -> impl IntoView
where
    R: Resource + Send + Sync + 'static,
    E: Fn(R) + Send + Sync + 'static,
    D: Fn(R) + Send + Sync + 'static,
{
    let edit = actions.can_edit.then(|| {
        let item = actions.item.clone();
        view! {
            <button
                class="btn btn-icon"
                aria-label=actions.edit_label()
                title=actions.edit_label()
                on:click=move |_| on_edit(item.clone())
            >
                "✎"
            </button>
        }
    });

    let delete = actions.can_delete.then(|| {
        let item = actions.item.clone();
        let question = actions.confirm_delete_message();
        view! {
            <button
                class="btn btn-icon btn-danger"
                aria-label=actions.delete_label()
                title=actions.delete_label()
                on:click=move |_| {
                    if gloo::dialogs::confirm(&question) {
                        on_delete(item.clone());
                    }
                }
            >
                "🗑"
            </button>
        }
    });

    view! { {edit} {delete} }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_title_accepts_markup() {
        let document = document();
        let parent: web_sys::HtmlElement = document.create_element("div").unwrap().unchecked_into();
        document.body().unwrap().append_child(&parent).unwrap();

        let _handle = leptos::mount::mount_to(parent.clone(), || {
            view! {
                <Item title=view! { <span>"Posto Sul"</span> <span class="badge">"Regional"</span> }.into_any()>
                    <p>"Goiânia"</p>
                </Item>
            }
        });

        let badge = parent.query_selector(".item-title .badge").unwrap().unwrap();
        assert_eq!(badge.text_content().as_deref(), Some("Regional"));
        assert!(parent.query_selector(".item-description p").unwrap().is_some());
    }
}
