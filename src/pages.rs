//! Páginas CRUD da CLI
//!
//! Cada recurso tem uma [`Screen`]: como montar os valores do formulário,
//! perguntar os campos, gerar o payload e descrever uma linha. O restante
//! (busca, modal, envio, exclusão) é o mesmo `PageController` da Web.

use crate::cli::CrudAction;
use crate::error::{Result, SchedulaError};
use crate::prompts::{self, ChamadoOptions};
use crate::render::{self, Row};
use schedula_common::filters::{apply_workstation_filters, WorkstationFilters};
use schedula_common::form::{FieldErrors, SubmitState, Validate};
use schedula_common::forms::{
    chamado_to_form_values, form_values_to_payload, CategoriaFormValues, ChamadoFormValues,
    CityFormValues, UserFormValues, WorkstationFormValues, FILL_ALL_FIELDS,
};
use schedula_common::item::ItemActions;
use schedula_common::list::ListView;
use schedula_common::select::{select_options, SelectOption};
use schedula_common::services;
use schedula_common::types::{
    Category, CategoryPayload, Chamado, ChamadoPayload, City, CityPayload, ProblemType,
    ProblemTypePayload, RegisterUserPayload, User, Workstation, WorkstationPayload,
};
use schedula_common::{
    Action, Gateway, Notifier, PageController, Resource, ResourceKind, Session, Transport,
};
use serde::de::DeserializeOwned;
use std::str::FromStr;

/// Sessão, gateway e canal de avisos de uma execução
pub struct Context<T, N> {
    pub gateway: Gateway<T>,
    pub session: Session,
    pub notifier: N,
}

impl<T: Transport, N: Notifier + Clone> Context<T, N> {
    pub fn page<R: Resource>(&self) -> PageController<R, N> {
        PageController::new(self.session.clone(), self.notifier.clone())
    }

    /// Lista auxiliar (selects). Em erro avisa e devolve vazio.
    pub async fn fetch_all<D: DeserializeOwned>(&self, kind: ResourceKind) -> Vec<D> {
        self.fetch(&services::list(kind)).await
    }

    async fn fetch<D: DeserializeOwned>(&self, request: &schedula_common::RequestDescriptor) -> Vec<D> {
        match self.gateway.request::<Vec<D>>(request).await.into_result() {
            Ok(response) => response.data.unwrap_or_default(),
            Err(error) => {
                self.notifier.error(&error.message);
                Vec::new()
            }
        }
    }
}

/// Tela de um recurso
pub trait Screen<R: Resource> {
    type Values: Validate;

    /// Ações exibidas nas linhas
    const OFFERED: &'static [Action] = &[Action::Edit, Action::Delete];

    fn values_for(&self, entity: Option<&R>) -> Self::Values;

    fn fill(&self, values: &mut Self::Values, errors: &FieldErrors) -> Result<()>;

    /// `None` quando falta um campo que a validação não cobre
    fn payload(&self, values: &Self::Values) -> Option<R::Payload>;

    fn row(&self, entity: &R) -> Row;

    fn filter(&self, items: &[R]) -> Vec<R> {
        items.to_vec()
    }
}

/// Hospeda um formulário até o envio dar certo ou o usuário desistir.
///
/// Os valores sobrevivem a erros de campo e do servidor. `retry` decide se
/// o formulário volta a ser exibido.
pub async fn host_form<R, N, T, V>(
    page: &mut PageController<R, N>,
    gateway: &Gateway<T>,
    mut values: V,
    mut fill: impl FnMut(&mut V, &FieldErrors) -> Result<()>,
    payload: impl Fn(&V) -> Option<R::Payload>,
    mut retry: impl FnMut(&str) -> Result<bool>,
) -> Result<bool>
where
    R: Resource + DeserializeOwned,
    N: Notifier,
    T: Transport,
    V: Validate,
{
    println!("== {} ==", page.state().modal_title());
    let mut errors = FieldErrors::default();
    let mut submit = SubmitState::default();

    loop {
        fill(&mut values, &errors)?;
        errors = values.validate();

        let outcome = match payload(&values) {
            _ if !errors.is_empty() => Err(format!("{} campo(s) inválido(s)", errors.len())),
            None => Err(FILL_ALL_FIELDS.to_string()),
            Some(payload) => {
                if !submit.begin() {
                    continue;
                }
                println!("Enviando...");
                let outcome = page.submit(gateway, &payload).await;
                submit.finish(outcome.clone());
                outcome
            }
        };

        match outcome {
            Ok(()) => return Ok(true),
            Err(message) => {
                tracing::debug!(%message, "form rejected");
                if !retry(&message)? {
                    page.cancel();
                    return Ok(false);
                }
            }
        }
    }
}

fn ask_retry(message: &str) -> Result<bool> {
    eprintln!("✖ {}", message);
    prompts::flag("Tentar novamente?", true)
}

fn parse_key<R: Resource>(key: &str) -> Result<R::Key>
where
    R::Key: FromStr,
{
    key.trim()
        .parse()
        .map_err(|_| SchedulaError::NotFound(format!("{} {}", R::KIND.label(), key)))
}

fn find<R: Resource, N: Notifier>(page: &PageController<R, N>, key: &str) -> Result<R>
where
    R::Key: FromStr,
{
    let parsed = parse_key::<R>(key)?;
    page.list()
        .find(&parsed)
        .cloned()
        .ok_or_else(|| SchedulaError::NotFound(format!("{} {}", R::KIND.label(), key)))
}

/// Texto da lista já filtrada
pub fn render_page<R, N, S>(page: &PageController<R, N>, screen: &S) -> String
where
    R: Resource,
    N: Notifier,
    S: Screen<R>,
{
    let list = page.list();
    let items = screen.filter(list.items());
    let view = ListView::state(list.data.as_ref().map(|_| items.as_slice()), list.busy());
    render::render_list(&view, page.session(), S::OFFERED, |item| screen.row(item))
}

/// Executa uma ação sobre a lista de um recurso
pub async fn run_crud<R, S, T, N>(ctx: &Context<T, N>, screen: &S, action: CrudAction) -> Result<()>
where
    R: Resource + DeserializeOwned,
    R::Key: FromStr,
    S: Screen<R>,
    T: Transport,
    N: Notifier + Clone,
{
    let mut page = ctx.page::<R>();
    page.refresh(&ctx.gateway).await;

    match action {
        CrudAction::List => {
            println!("{}", render_page(&page, screen));
        }
        CrudAction::Create => {
            if page.open_create() {
                host_form(
                    &mut page,
                    &ctx.gateway,
                    screen.values_for(None),
                    |values, errors| screen.fill(values, errors),
                    |values| screen.payload(values),
                    ask_retry,
                )
                .await?;
            }
        }
        CrudAction::Edit { key } => {
            let entity = find(&page, &key)?;
            let values = screen.values_for(Some(&entity));
            if page.open_edit(entity) {
                host_form(
                    &mut page,
                    &ctx.gateway,
                    values,
                    |values, errors| screen.fill(values, errors),
                    |values| screen.payload(values),
                    ask_retry,
                )
                .await?;
            }
        }
        CrudAction::Delete { key, yes } => {
            let entity = find(&page, &key)?;
            delete_with_confirm(&mut page, &ctx.gateway, &entity, yes).await?;
        }
    }
    Ok(())
}

/// Confirmação → requisição. Sem permissão não pergunta nem envia.
pub async fn delete_with_confirm<R, N, T>(
    page: &mut PageController<R, N>,
    gateway: &Gateway<T>,
    entity: &R,
    yes: bool,
) -> Result<bool>
where
    R: Resource + DeserializeOwned,
    N: Notifier,
    T: Transport,
{
    let actions = ItemActions::for_session(entity.clone(), page.session());
    if actions.can_delete && !yes {
        if !prompts::flag(&actions.confirm_delete_message(), false)? {
            return Ok(false);
        }
    }
    Ok(page.delete(gateway, entity).await)
}

pub struct CityScreen;

impl Screen<City> for CityScreen {
    type Values = CityFormValues;

    fn values_for(&self, entity: Option<&City>) -> CityFormValues {
        entity.map(CityFormValues::from).unwrap_or_default()
    }

    fn fill(&self, values: &mut CityFormValues, errors: &FieldErrors) -> Result<()> {
        prompts::fill_city(values, errors)
    }

    fn payload(&self, values: &CityFormValues) -> Option<CityPayload> {
        Some(values.clone().into())
    }

    fn row(&self, entity: &City) -> Row {
        render::city_row(entity)
    }
}

pub struct CategoryScreen;

impl Screen<Category> for CategoryScreen {
    type Values = CategoriaFormValues;

    fn values_for(&self, entity: Option<&Category>) -> CategoriaFormValues {
        entity.map(CategoriaFormValues::from).unwrap_or_default()
    }

    fn fill(&self, values: &mut CategoriaFormValues, errors: &FieldErrors) -> Result<()> {
        prompts::fill_categoria(values, errors)
    }

    fn payload(&self, values: &CategoriaFormValues) -> Option<CategoryPayload> {
        Some(values.clone().into())
    }

    fn row(&self, entity: &Category) -> Row {
        render::category_row(entity)
    }
}

pub struct ProblemTypeScreen;

impl Screen<ProblemType> for ProblemTypeScreen {
    type Values = CategoriaFormValues;

    fn values_for(&self, entity: Option<&ProblemType>) -> CategoriaFormValues {
        entity.map(CategoriaFormValues::from).unwrap_or_default()
    }

    fn fill(&self, values: &mut CategoriaFormValues, errors: &FieldErrors) -> Result<()> {
        prompts::fill_categoria(values, errors)
    }

    fn payload(&self, values: &CategoriaFormValues) -> Option<ProblemTypePayload> {
        Some(values.clone().into())
    }

    fn row(&self, entity: &ProblemType) -> Row {
        render::problem_type_row(entity)
    }
}

pub struct UserScreen;

impl Screen<User> for UserScreen {
    type Values = UserFormValues;

    fn values_for(&self, entity: Option<&User>) -> UserFormValues {
        entity.map(UserFormValues::from).unwrap_or_default()
    }

    fn fill(&self, values: &mut UserFormValues, errors: &FieldErrors) -> Result<()> {
        prompts::fill_user(values, errors)
    }

    fn payload(&self, values: &UserFormValues) -> Option<RegisterUserPayload> {
        Some(values.to_payload())
    }

    fn row(&self, entity: &User) -> Row {
        render::user_row(entity)
    }
}

/// Postos de trabalho: selects de cidade/regional e filtros da lista
#[derive(Debug, Clone, Default)]
pub struct WorkstationScreen {
    pub cities: Vec<City>,
    pub regionais: Vec<SelectOption>,
    pub filters: WorkstationFilters,
}

impl WorkstationScreen {
    pub async fn load<T: Transport, N: Notifier + Clone>(
        ctx: &Context<T, N>,
        filters: WorkstationFilters,
    ) -> Self {
        let cities: Vec<City> = ctx.fetch_all(ResourceKind::City).await;
        let regionais: Vec<Workstation> = ctx.fetch(&services::regional_workstations()).await;
        Self {
            cities,
            regionais: select_options(Some(regionais.as_slice()), |w| w.name.clone(), |w| w.id.to_string()),
            filters,
        }
    }

    fn city_options(&self) -> Vec<SelectOption> {
        select_options(Some(self.cities.as_slice()), |c| c.name.clone(), |c| c.id.to_string())
    }
}

impl Screen<Workstation> for WorkstationScreen {
    type Values = WorkstationFormValues;

    fn values_for(&self, entity: Option<&Workstation>) -> WorkstationFormValues {
        entity
            .map(|w| WorkstationFormValues::from_workstation(w, &self.city_options(), &self.regionais))
            .unwrap_or_default()
    }

    fn fill(&self, values: &mut WorkstationFormValues, errors: &FieldErrors) -> Result<()> {
        prompts::fill_workstation(values, errors, &self.city_options(), &self.regionais)
    }

    fn payload(&self, values: &WorkstationFormValues) -> Option<WorkstationPayload> {
        values.to_payload()
    }

    fn row(&self, entity: &Workstation) -> Row {
        render::workstation_row(&self.cities)(entity)
    }

    fn filter(&self, items: &[Workstation]) -> Vec<Workstation> {
        apply_workstation_filters(items, &self.filters)
    }
}

/// Chamados: só edição
#[derive(Debug, Clone, Default)]
pub struct ChamadoScreen {
    pub options: ChamadoOptions,
}

impl ChamadoScreen {
    pub async fn load<T: Transport, N: Notifier + Clone>(ctx: &Context<T, N>) -> Self {
        let workstations: Vec<Workstation> = ctx.fetch_all(ResourceKind::Workstation).await;
        let cities: Vec<City> = ctx.fetch_all(ResourceKind::City).await;
        let categories: Vec<Category> = ctx.fetch_all(ResourceKind::Category).await;

        let problems = categories
            .iter()
            .map(|c| {
                let options = select_options(
                    Some(c.problem_types.as_slice()),
                    |p| p.name.clone(),
                    |p| p.id.to_string(),
                );
                (c.id.to_string(), options)
            })
            .collect();

        Self {
            options: ChamadoOptions {
                workstations: select_options(Some(workstations.as_slice()), |w| w.name.clone(), |w| w.id.to_string()),
                cities: select_options(Some(cities.as_slice()), |c| c.name.clone(), |c| c.id.to_string()),
                categories: select_options(Some(categories.as_slice()), |c| c.name.clone(), |c| c.id.to_string()),
                problems,
            },
        }
    }

    /// Troca os rótulos numéricos pelos nomes carregados
    fn relabel(&self, mut values: ChamadoFormValues) -> ChamadoFormValues {
        let relabel = |current: &mut Option<SelectOption>, options: &[SelectOption]| {
            if let Some(found) = current
                .as_ref()
                .and_then(|c| options.iter().find(|o| o.value == c.value))
            {
                *current = Some(found.clone());
            }
        };
        relabel(&mut values.workstation, &self.options.workstations);
        relabel(&mut values.city, &self.options.cities);
        values
    }
}

impl Screen<Chamado> for ChamadoScreen {
    type Values = ChamadoFormValues;

    const OFFERED: &'static [Action] = &[Action::Edit];

    fn values_for(&self, entity: Option<&Chamado>) -> ChamadoFormValues {
        entity
            .map(|c| self.relabel(chamado_to_form_values(c)))
            .unwrap_or_default()
    }

    fn fill(&self, values: &mut ChamadoFormValues, errors: &FieldErrors) -> Result<()> {
        prompts::fill_chamado(values, errors, &self.options)
    }

    fn payload(&self, values: &ChamadoFormValues) -> Option<ChamadoPayload> {
        Some(form_values_to_payload(values))
    }

    fn row(&self, entity: &Chamado) -> Row {
        render::chamado_row(entity)
    }
}
