//! Controlador de página ligado a sinais
//!
//! O `PageController` vive num `RwSignal`; as chamadas à API rodam em
//! `spawn_local` entre `prepare_*` e `complete_*`. Se o componente for
//! descartado antes da resposta, `try_update` não encontra o sinal e o
//! resultado é ignorado.

use crate::api::{self, FetchTransport};
use crate::components::item::ItemActions as ActionButtons;
use crate::components::toasts::ToastNotifier;
use leptos::prelude::*;
use leptos::task::spawn_local;
use schedula_common::item::ItemActions;
use schedula_common::{Action, Gateway, PageController, Resource, Session};
use serde::de::DeserializeOwned;
use std::future::Future;

pub struct PageHandle<R: Send + Sync + 'static> {
    pub ctrl: RwSignal<PageController<R, ToastNotifier>>,
    gateway: StoredValue<Gateway<FetchTransport>>,
}

impl<R: Send + Sync + 'static> Clone for PageHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Send + Sync + 'static> Copy for PageHandle<R> {}

impl<R> PageHandle<R>
where
    R: Resource + DeserializeOwned + Send + Sync + 'static,
    R::Key: Send + Sync,
    R::Payload: Send + Sync + 'static,
{
    /// Cria o controlador e dispara a primeira busca
    pub fn new(session: Session, notifier: ToastNotifier) -> Self {
        let gateway = api::gateway(Some(&session));
        let handle = Self {
            ctrl: RwSignal::new(PageController::new(session, notifier)),
            gateway: StoredValue::new(gateway),
        };
        let ctrl = handle.ctrl;
        on_cleanup(move || {
            ctrl.try_update(|c| c.unmount());
        });
        handle.refresh();
        handle
    }

    pub fn gateway(&self) -> Gateway<FetchTransport> {
        self.gateway.get_value()
    }

    pub fn can(&self, action: Action) -> bool {
        self.ctrl.with_untracked(|c| c.can(action))
    }

    pub fn items(&self) -> Signal<Option<Vec<R>>> {
        let ctrl = self.ctrl;
        Signal::derive(move || ctrl.with(|c| c.list().data.clone()))
    }

    pub fn busy(&self) -> Signal<bool> {
        let ctrl = self.ctrl;
        Signal::derive(move || ctrl.with(|c| c.list().busy()))
    }

    pub fn is_open(&self) -> Signal<bool> {
        let ctrl = self.ctrl;
        Signal::derive(move || ctrl.with(|c| c.state().is_open()))
    }

    pub fn modal_title(&self) -> Signal<String> {
        let ctrl = self.ctrl;
        Signal::derive(move || ctrl.with(|c| c.state().modal_title()))
    }

    /// Entidade em edição (`None` ao criar). Lida sem rastrear: o
    /// formulário é montado uma vez por abertura do modal.
    pub fn editing_now(&self) -> Option<R> {
        self.ctrl
            .with_untracked(|c| c.state().editing().cloned())
    }

    pub fn actions(&self, item: R, offered: &[Action]) -> ItemActions<R> {
        self.ctrl
            .with_untracked(|c| ItemActions::for_actions(item, c.session(), offered))
    }

    /// Botões da linha ligados a este controlador
    pub fn action_buttons(&self, item: R, offered: &[Action]) -> AnyView {
        let page = *self;
        let actions = self.actions(item, offered);
        if actions.is_empty() {
            return ().into_any();
        }
        view! {
            <ActionButtons
                actions=actions
                on_edit=move |entity| page.open_edit(entity)
                on_delete=move |entity| page.delete(entity)
            />
        }
        .into_any()
    }

    pub fn open_create(&self) {
        self.ctrl.update(|c| {
            c.open_create();
        });
    }

    pub fn open_edit(&self, entity: R) {
        self.ctrl.update(|c| {
            c.open_edit(entity);
        });
    }

    pub fn cancel(&self) {
        self.ctrl.update(|c| c.cancel());
    }

    pub fn refresh(&self) {
        let ctrl = self.ctrl;
        let Some(request) = ctrl.try_update(|c| c.begin_refresh()) else {
            return;
        };
        let gateway = self.gateway();
        spawn_local(async move {
            let result = gateway.request::<Vec<R>>(&request).await;
            ctrl.try_update(|c| c.complete_refresh(result));
        });
    }

    /// Envio do formulário aberto; o resultado volta para o formulário
    pub fn submit(&self, payload: R::Payload) -> impl Future<Output = Result<(), String>> + 'static {
        let ctrl = self.ctrl;
        let gateway = self.gateway();
        async move {
            let pending = match ctrl.try_with_untracked(|c| c.prepare_submit(&payload)) {
                Some(pending) => pending?,
                None => return Ok(()),
            };
            let result = gateway.request::<R>(&pending.request).await;
            ctrl.try_update(|c| c.complete_submit(pending, result))
                .unwrap_or(Ok(()))
        }
    }

    /// Chamado depois da confirmação do usuário
    pub fn delete(&self, entity: R) {
        let ctrl = self.ctrl;
        let Some(Some(pending)) = ctrl.try_with_untracked(|c| c.prepare_delete(&entity)) else {
            return;
        };
        let gateway = self.gateway();
        spawn_local(async move {
            let result = gateway.request(&pending.request).await;
            ctrl.try_update(|c| c.complete_delete(pending, result));
        });
    }
}

/// Lista auxiliar para selects, carregada uma vez
pub fn load_options<D>(session: &Session, request: schedula_common::RequestDescriptor) -> RwSignal<Vec<D>>
where
    D: DeserializeOwned + Send + Sync + 'static,
{
    let options = RwSignal::new(Vec::new());
    let gateway = api::gateway(Some(session));
    spawn_local(async move {
        match gateway.request::<Vec<D>>(&request).await.into_result() {
            Ok(response) => {
                options.try_set(response.data.unwrap_or_default());
            }
            Err(error) => gloo::console::warn!(format!("Falha ao carregar opções: {}", error)),
        }
    });
    options
}
