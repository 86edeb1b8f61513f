//! Controlador de página CRUD
//!
//! Máquina de estados `Idle -> Creating | Editing(e) -> Idle` sobre o cache
//! da lista. As mutações são reconciliadas localmente a partir da resposta
//! do servidor, sem nova busca.
//!
//! Cada operação tem duas fases (`prepare_*` devolve a chamada a fazer,
//! `complete_*` aplica o resultado) para que a UI possa soltar o estado
//! durante o `await`. Os métodos assíncronos juntam as duas fases.

use crate::envelope::ApiResponse;
use crate::list::ListState;
use crate::policy::{is_allowed, Action};
use crate::request::{Gateway, RequestDescriptor, Transport};
use crate::result::{ApiResult, ErrorInfo};
use crate::services;
use crate::session::{Notifier, Session, ACCESS_DENIED};
use crate::types::Resource;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Resposta de sucesso sem a entidade
pub const MISSING_ENTITY_MESSAGE: &str = "Resposta do servidor sem dados";
/// Envio sem formulário aberto
pub const NO_FORM_MESSAGE: &str = "Nenhum formulário aberto";

/// Estado do modal da página
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<R> {
    Idle,
    Creating,
    Editing(R),
}

impl<R> Default for PageState<R> {
    fn default() -> Self {
        PageState::Idle
    }
}

impl<R: Resource> PageState<R> {
    pub fn is_open(&self) -> bool {
        !matches!(self, PageState::Idle)
    }

    pub fn editing(&self) -> Option<&R> {
        match self {
            PageState::Editing(entity) => Some(entity),
            _ => None,
        }
    }

    pub fn modal_title(&self) -> String {
        R::KIND.modal_title(matches!(self, PageState::Editing(_)))
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Mutation<K> {
    Create,
    Update(K),
    Delete(K),
}

/// Chamada preparada e ainda não concluída
#[derive(Debug, Clone)]
pub struct PendingMutation<R: Resource> {
    mutation: Mutation<R::Key>,
    pub request: RequestDescriptor,
}

impl<R: Resource> PendingMutation<R> {
    /// Chave afetada (`None` em criação)
    pub fn key(&self) -> Option<&R::Key> {
        match &self.mutation {
            Mutation::Create => None,
            Mutation::Update(key) | Mutation::Delete(key) => Some(key),
        }
    }
}

#[derive(Debug)]
pub struct PageController<R, N> {
    session: Session,
    notifier: N,
    list: ListState<R>,
    state: PageState<R>,
    mounted: bool,
}

impl<R: Resource, N: Notifier> PageController<R, N> {
    pub fn new(session: Session, notifier: N) -> Self {
        Self {
            session,
            notifier,
            list: ListState::new(),
            state: PageState::Idle,
            mounted: true,
        }
    }

    pub fn list(&self) -> &ListState<R> {
        &self.list
    }

    pub fn state(&self) -> &PageState<R> {
        &self.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn can(&self, action: Action) -> bool {
        is_allowed(R::KIND, action, self.session.access())
    }

    /// Verifica a política; nega com aviso
    fn guard(&self, action: Action) -> bool {
        if self.can(action) {
            return true;
        }
        tracing::debug!(resource = ?R::KIND, action = action.label(), "action denied");
        self.notifier.error(ACCESS_DENIED);
        false
    }

    pub fn open_create(&mut self) -> bool {
        if !self.guard(Action::Create) {
            return false;
        }
        self.state = PageState::Creating;
        true
    }

    pub fn open_edit(&mut self, entity: R) -> bool {
        if !self.guard(Action::Edit) {
            return false;
        }
        self.state = PageState::Editing(entity);
        true
    }

    /// Fechar o modal nunca é bloqueado
    pub fn cancel(&mut self) {
        self.state = PageState::Idle;
    }

    /// Descarta respostas que chegarem depois
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn begin_refresh(&mut self) -> RequestDescriptor {
        self.list.begin_fetch();
        services::list(R::KIND)
    }

    pub fn complete_refresh(&mut self, result: ApiResult<ApiResponse<Vec<R>>>) {
        if !self.mounted {
            return;
        }
        if let Some(error) = self.list.finish_fetch(result) {
            self.notifier.error(&error.message);
        }
    }

    /// Monta a chamada de criação ou edição conforme o estado atual
    pub fn prepare_submit(&self, payload: &R::Payload) -> Result<PendingMutation<R>, String> {
        let (mutation, request) = match &self.state {
            PageState::Idle => return Err(NO_FORM_MESSAGE.to_string()),
            PageState::Creating => {
                if !self.guard(Action::Create) {
                    return Err(ACCESS_DENIED.to_string());
                }
                (Mutation::Create, services::create::<R>(payload))
            }
            PageState::Editing(entity) => {
                if !self.guard(Action::Edit) {
                    return Err(ACCESS_DENIED.to_string());
                }
                let key = entity.key();
                let request = services::update::<R>(&key, payload);
                (Mutation::Update(key), request)
            }
        };
        let request = request.map_err(|e| e.to_string())?;
        Ok(PendingMutation { mutation, request })
    }

    /// Aplica a resposta do envio. Em erro o modal continua aberto.
    pub fn complete_submit(
        &mut self,
        pending: PendingMutation<R>,
        result: ApiResult<ApiResponse<R>>,
    ) -> Result<(), String> {
        if !self.mounted {
            return Ok(());
        }
        let entity = match result {
            ApiResult::Success { value } => value.data,
            ApiResult::Error { error } => return Err(self.fail(error)),
        };
        let Some(entity) = entity else {
            return Err(self.fail(ErrorInfo::transport(MISSING_ENTITY_MESSAGE)));
        };

        // o modal pode ter sido trocado por outro enquanto a chamada corria
        let form_still_open = match (&pending.mutation, &self.state) {
            (Mutation::Create, PageState::Creating) => true,
            (Mutation::Update(key), PageState::Editing(open)) => open.key() == *key,
            _ => false,
        };

        match pending.mutation {
            Mutation::Create => {
                self.list.append(entity);
                self.notifier.success(&R::KIND.created_message());
            }
            Mutation::Update(key) => {
                if !self.list.replace(&key, entity) {
                    tracing::warn!(%key, "updated entity not in cache");
                }
                self.notifier.success(&R::KIND.updated_message());
            }
            Mutation::Delete(_) => {}
        }
        if form_still_open {
            self.state = PageState::Idle;
        }
        Ok(())
    }

    /// `None` quando a política nega; nenhuma chamada deve ser feita
    pub fn prepare_delete(&self, entity: &R) -> Option<PendingMutation<R>> {
        if !self.guard(Action::Delete) {
            return None;
        }
        let key = entity.key();
        Some(PendingMutation {
            request: services::delete::<R>(&key),
            mutation: Mutation::Delete(key),
        })
    }

    /// Remove do cache em sucesso; em erro a lista fica como estava
    pub fn complete_delete(
        &mut self,
        pending: PendingMutation<R>,
        result: ApiResult<ApiResponse<Value>>,
    ) -> bool {
        if !self.mounted {
            return false;
        }
        if let ApiResult::Error { error } = result {
            self.fail(error);
            return false;
        }
        if let Mutation::Delete(key) = pending.mutation {
            self.list.remove(&key);
        }
        self.notifier.success(&R::KIND.deleted_message());
        true
    }

    fn fail(&self, error: ErrorInfo) -> String {
        self.notifier.error(&error.message);
        error.message
    }
}

impl<R, N> PageController<R, N>
where
    R: Resource + DeserializeOwned,
    N: Notifier,
{
    pub async fn refresh<T: Transport>(&mut self, gateway: &Gateway<T>) {
        let request = self.begin_refresh();
        let result = gateway.request(&request).await;
        self.complete_refresh(result);
    }

    pub async fn submit<T: Transport>(
        &mut self,
        gateway: &Gateway<T>,
        payload: &R::Payload,
    ) -> Result<(), String> {
        let pending = self.prepare_submit(payload)?;
        let result = gateway.request(&pending.request).await;
        self.complete_submit(pending, result)
    }

    /// A confirmação do usuário fica com quem chama
    pub async fn delete<T: Transport>(&mut self, gateway: &Gateway<T>, entity: &R) -> bool {
        let Some(pending) = self.prepare_delete(entity) else {
            return false;
        };
        let result = gateway.request(&pending.request).await;
        self.complete_delete(pending, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Method;
    use crate::session::Access;
    use crate::testing::{RecordingNotifier, ScriptedTransport};
    use crate::types::{City, CityPayload, Workstation};
    use futures::executor::block_on;

    fn city(id: i64, name: &str) -> City {
        City {
            id,
            name: name.to_string(),
        }
    }

    fn cities_page(access: Access) -> (PageController<City, RecordingNotifier>, RecordingNotifier) {
        let notifier = RecordingNotifier::new();
        let mut page = PageController::new(Session::new("Ana", access), notifier.clone());
        page.list.set_data(vec![city(1, "A"), city(2, "B")]);
        (page, notifier)
    }

    #[test]
    fn test_delete_removes_by_key() {
        let (mut page, notifier) = cities_page(Access::Admin);
        let transport = ScriptedTransport::new();
        transport.push_ok(serde_json::json!(null));
        let gateway = Gateway::new(&transport, "http://api");

        assert!(block_on(page.delete(&gateway, &city(1, "A"))));
        assert_eq!(page.list().items(), &[city(2, "B")]);
        assert_eq!(notifier.successes(), vec!["Cidade deletada com sucesso!"]);

        let sent = transport.sent();
        assert_eq!(sent[0].method, Method::Delete);
        assert_eq!(sent[0].url, "http://api/cities/1");
    }

    #[test]
    fn test_failed_delete_keeps_list() {
        let (mut page, notifier) = cities_page(Access::Admin);
        let transport = ScriptedTransport::new();
        transport.push_error("Cidade em uso");
        let gateway = Gateway::new(&transport, "http://api");

        assert!(!block_on(page.delete(&gateway, &city(1, "A"))));
        assert_eq!(page.list().len(), 2);
        assert_eq!(notifier.errors(), vec!["Cidade em uso"]);
    }

    #[test]
    fn test_create_appends_server_entity() {
        let (mut page, notifier) = cities_page(Access::Basic);
        let transport = ScriptedTransport::new();
        transport.push_ok(city(3, "C"));
        let gateway = Gateway::new(&transport, "http://api");

        assert!(page.open_create());
        let payload = CityPayload { name: "C".into() };
        assert_eq!(block_on(page.submit(&gateway, &payload)), Ok(()));

        assert_eq!(page.list().items(), &[city(1, "A"), city(2, "B"), city(3, "C")]);
        assert_eq!(page.state(), &PageState::Idle);
        assert_eq!(notifier.successes(), vec!["Cidade criada com sucesso!"]);
        assert_eq!(transport.sent()[0].body.as_deref(), Some(r#"{"name":"C"}"#));
    }

    #[test]
    fn test_update_replaces_in_place() {
        let (mut page, _) = cities_page(Access::Basic);
        let transport = ScriptedTransport::new();
        transport.push_ok(city(1, "A2"));
        let gateway = Gateway::new(&transport, "http://api");

        assert!(page.open_edit(city(1, "A")));
        let payload = CityPayload { name: "A2".into() };
        assert_eq!(block_on(page.submit(&gateway, &payload)), Ok(()));

        assert_eq!(page.list().items(), &[city(1, "A2"), city(2, "B")]);
        assert_eq!(transport.sent()[0].method, Method::Put);
        assert_eq!(transport.sent()[0].url, "http://api/cities/1");
    }

    #[test]
    fn test_failed_edit_stays_open() {
        let (mut page, notifier) = cities_page(Access::Basic);
        let transport = ScriptedTransport::new();
        transport.push_error("Nome inválido");
        let gateway = Gateway::new(&transport, "http://api");

        page.open_edit(city(1, "A"));
        let payload = CityPayload { name: "".into() };
        let outcome = block_on(page.submit(&gateway, &payload));

        assert_eq!(outcome, Err("Nome inválido".to_string()));
        assert_eq!(page.state(), &PageState::Editing(city(1, "A")));
        assert_eq!(page.list().items(), &[city(1, "A"), city(2, "B")]);
        assert_eq!(notifier.errors(), vec!["Nome inválido"]);
    }

    #[test]
    fn test_success_without_entity_is_an_error() {
        let (mut page, notifier) = cities_page(Access::Basic);
        let transport = ScriptedTransport::new();
        transport.push_raw(201, "");
        let gateway = Gateway::new(&transport, "http://api");

        page.open_create();
        let outcome = block_on(page.submit(&gateway, &CityPayload { name: "C".into() }));
        assert_eq!(outcome, Err(MISSING_ENTITY_MESSAGE.to_string()));
        assert!(page.state().is_open());
        assert_eq!(page.list().len(), 2);
        assert_eq!(notifier.errors().len(), 1);
    }

    #[test]
    fn test_basic_cannot_delete_workstation() {
        let notifier = RecordingNotifier::new();
        let mut page: PageController<Workstation, _> =
            PageController::new(Session::new("Ana", Access::Basic), notifier.clone());
        let transport = ScriptedTransport::new();
        let gateway = Gateway::new(&transport, "http://api");
        let ws = Workstation {
            id: 7,
            name: "Posto".into(),
            city_id: 1,
            regional: false,
            regional_id: None,
            adsl_vpn: true,
            ip: String::new(),
            link: String::new(),
            phones: vec![],
        };
        page.list.set_data(vec![ws.clone()]);

        assert!(!block_on(page.delete(&gateway, &ws)));
        assert_eq!(transport.sent_count(), 0);
        assert_eq!(notifier.errors(), vec![ACCESS_DENIED]);
        assert_eq!(page.list().len(), 1);

        assert!(!page.open_edit(ws));
        assert!(!page.open_create());
        assert_eq!(page.state(), &PageState::Idle);
    }

    #[test]
    fn test_late_response_after_unmount_is_ignored() {
        let (mut page, notifier) = cities_page(Access::Admin);
        page.open_create();
        let pending = page
            .prepare_submit(&CityPayload { name: "C".into() })
            .unwrap();
        page.unmount();

        let result = ApiResult::success(ApiResponse::ok(city(3, "C")));
        assert_eq!(page.complete_submit(pending, result), Ok(()));
        assert_eq!(page.list().len(), 2);
        assert!(notifier.messages.borrow().is_empty());
    }

    #[test]
    fn test_refresh_keeps_stale_items_on_error() {
        let (mut page, notifier) = cities_page(Access::Basic);
        let transport = ScriptedTransport::new();
        transport.push_failure("connection refused");
        let gateway = Gateway::new(&transport, "http://api");

        block_on(page.refresh(&gateway));
        assert_eq!(page.list().len(), 2);
        assert!(!page.list().busy());
        assert_eq!(notifier.errors(), vec!["connection refused"]);
    }

    #[test]
    fn test_refresh_loads_server_order() {
        let notifier = RecordingNotifier::new();
        let mut page: PageController<City, _> =
            PageController::new(Session::new("Ana", Access::Basic), notifier);
        let transport = ScriptedTransport::new();
        transport.push_ok(vec![city(2, "B"), city(1, "A")]);
        let gateway = Gateway::new(&transport, "http://api");

        page.begin_refresh();
        assert!(page.list().is_loading);
        block_on(page.refresh(&gateway));
        assert_eq!(page.list().items(), &[city(2, "B"), city(1, "A")]);
    }

    #[test]
    fn test_submit_without_open_form() {
        let (page, _) = cities_page(Access::Admin);
        let outcome = page.prepare_submit(&CityPayload::default());
        assert_eq!(outcome.err().as_deref(), Some(NO_FORM_MESSAGE));
    }

    #[test]
    fn test_modal_title_follows_state() {
        let (mut page, _) = cities_page(Access::Admin);
        page.open_create();
        assert_eq!(page.state().modal_title(), "Nova Cidade");
        page.open_edit(city(1, "A"));
        assert_eq!(page.state().modal_title(), "Editar Cidade");
        page.cancel();
        assert!(!page.state().is_open());
    }

    #[test]
    fn test_refresh_tolerates_null_fields() {
        let transport = ScriptedTransport::new();
        transport.push_raw(
            200,
            r#"{"error": null, "message": "", "data": [
                {"id": 1, "name": "Posto VPN", "city_id": 1, "adsl_vpn": true, "ip": null, "link": null},
                {"id": 2, "name": "Posto Sul", "city_id": 1, "ip": "10.0.0.2", "link": "5MB"}
            ]}"#,
        );
        let gateway = Gateway::new(&transport, "http://api");
        let notifier = RecordingNotifier::new();
        let mut page: PageController<Workstation, _> =
            PageController::new(Session::new("Ana", Access::Admin), notifier.clone());

        block_on(page.refresh(&gateway));

        assert_eq!(page.list().len(), 2);
        assert!(notifier.errors().is_empty());
    }

    #[test]
    fn test_late_success_keeps_other_modal_open() {
        let (mut page, _) = cities_page(Access::Admin);

        page.open_edit(city(1, "A"));
        let pending = page.prepare_submit(&CityPayload { name: "A2".into() }).unwrap();
        page.cancel();
        page.open_edit(city(2, "B"));

        let result = ApiResult::success(ApiResponse::ok(city(1, "A2")));
        assert_eq!(page.complete_submit(pending, result), Ok(()));

        assert_eq!(page.list().items(), &[city(1, "A2"), city(2, "B")]);
        assert_eq!(page.state(), &PageState::Editing(city(2, "B")));
    }
}
