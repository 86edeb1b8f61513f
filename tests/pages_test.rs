//! Páginas CRUD contra um servidor roteirizado

use schedula::auth::sign_in;
use schedula::cli::CrudAction;
use schedula::pages::{
    delete_with_confirm, host_form, render_page, run_crud, CityScreen, Context, WorkstationScreen,
};
use schedula_common::filters::WorkstationFilters;
use schedula_common::form::REQUIRED_MESSAGE;
use schedula_common::forms::{CityFormValues, FILL_ALL_FIELDS};
use schedula_common::select::SelectOption;
use schedula_common::session::{Access, Credentials};
use schedula_common::testing::{RecordingNotifier, ScriptedTransport};
use schedula_common::types::{City, CityPayload, Workstation};
use schedula_common::{Gateway, Method, PageController, PageState, Session, ACCESS_DENIED};
use serde_json::json;

fn city(id: i64, name: &str) -> City {
    City {
        id,
        name: name.to_string(),
    }
}

fn workstation(id: i64, name: &str, regional_id: Option<i64>) -> Workstation {
    Workstation {
        id,
        name: name.to_string(),
        city_id: 1,
        regional: regional_id.is_none(),
        regional_id,
        adsl_vpn: true,
        ip: String::new(),
        link: String::new(),
        phones: vec![],
    }
}

fn context(transport: &ScriptedTransport, access: Access) -> Context<&ScriptedTransport, RecordingNotifier> {
    Context {
        gateway: Gateway::new(transport, "http://api"),
        session: Session::new("Ana", access),
        notifier: RecordingNotifier::new(),
    }
}

/// Exclusão remove só a entrada com a chave
#[tokio::test]
async fn test_delete_city_from_list() {
    let transport = ScriptedTransport::new();
    transport.push_ok(vec![city(1, "A"), city(2, "B")]);
    transport.push_ok(json!(null));
    let ctx = context(&transport, Access::Admin);

    let mut page = ctx.page::<City>();
    page.refresh(&ctx.gateway).await;
    let removed = delete_with_confirm(&mut page, &ctx.gateway, &city(1, "A"), true)
        .await
        .unwrap();

    assert!(removed);
    assert_eq!(page.list().items(), &[city(2, "B")]);
    assert_eq!(transport.sent()[1].method, Method::Delete);
    assert_eq!(ctx.notifier.successes(), vec!["Cidade deletada com sucesso!"]);
}

/// Básico não exclui posto: nada é enviado além da listagem
#[tokio::test]
async fn test_basic_delete_workstation_is_denied() {
    let transport = ScriptedTransport::new();
    transport.push_ok(vec![workstation(1, "Posto", None)]);
    let ctx = context(&transport, Access::Basic);

    let action = CrudAction::Delete {
        key: "1".into(),
        yes: false,
    };
    run_crud::<Workstation, _, _, _>(&ctx, &WorkstationScreen::default(), action)
        .await
        .unwrap();

    assert_eq!(transport.sent_count(), 1);
    assert_eq!(ctx.notifier.errors(), vec![ACCESS_DENIED]);
}

/// Chave inexistente é erro da CLI
#[tokio::test]
async fn test_edit_unknown_key() {
    let transport = ScriptedTransport::new();
    transport.push_ok(vec![city(1, "A")]);
    let ctx = context(&transport, Access::Admin);

    let action = CrudAction::Edit { key: "9".into() };
    let result = run_crud::<City, _, _, _>(&ctx, &CityScreen, action).await;
    assert!(result.is_err());
}

/// Erro do servidor mantém o formulário com os valores digitados
#[tokio::test]
async fn test_form_keeps_values_after_server_error() {
    let transport = ScriptedTransport::new();
    transport.push_error("Nome inválido");
    transport.push_ok(city(1, "Anápolis"));
    let gateway = Gateway::new(&transport, "http://api");
    let notifier = RecordingNotifier::new();

    let mut page: PageController<City, _> =
        PageController::new(Session::new("Ana", Access::Admin), notifier.clone());
    page.open_edit(city(1, "A"));

    let mut seen = Vec::new();
    let mut retries = Vec::new();
    let done = host_form(
        &mut page,
        &gateway,
        CityFormValues::from(&city(1, "A")),
        |values, _errors| {
            seen.push(values.name.clone());
            if values.name == "A" {
                values.name = "Anápolis".into();
            }
            Ok(())
        },
        |values| Some(CityPayload::from(values.clone())),
        |message| {
            retries.push(message.to_string());
            Ok(true)
        },
    )
    .await
    .unwrap();

    assert!(done);
    assert_eq!(seen, vec!["A", "Anápolis"]);
    assert_eq!(retries, vec!["Nome inválido"]);
    assert_eq!(notifier.errors(), vec!["Nome inválido"]);
    assert_eq!(page.state(), &PageState::Idle);
    assert_eq!(transport.sent_count(), 2);
}

/// Erro de campo não chega à rede
#[tokio::test]
async fn test_field_errors_block_submit() {
    let transport = ScriptedTransport::new();
    let gateway = Gateway::new(&transport, "http://api");
    let mut page: PageController<City, _> =
        PageController::new(Session::new("Ana", Access::Admin), RecordingNotifier::new());
    page.open_create();

    let mut field_errors = Vec::new();
    let done = host_form(
        &mut page,
        &gateway,
        CityFormValues::default(),
        |_values, errors| {
            if let Some(message) = errors.get("name") {
                field_errors.push(message.to_string());
            }
            Ok(())
        },
        |values| Some(CityPayload::from(values.clone())),
        |_message| Ok(false),
    )
    .await
    .unwrap();

    assert!(!done);
    assert_eq!(transport.sent_count(), 0);
    assert!(field_errors.is_empty());
    assert_eq!(page.state(), &PageState::Idle);

    // a segunda passagem mostra o erro do campo
    page.open_create();
    let mut attempts = 0;
    host_form(
        &mut page,
        &gateway,
        CityFormValues::default(),
        |_values, errors| {
            if let Some(message) = errors.get("name") {
                field_errors.push(message.to_string());
            }
            Ok(())
        },
        |values| Some(CityPayload::from(values.clone())),
        |_message| {
            attempts += 1;
            Ok(attempts < 2)
        },
    )
    .await
    .unwrap();
    assert_eq!(field_errors, vec![REQUIRED_MESSAGE]);
    assert_eq!(transport.sent_count(), 0);
}

/// Filtros por regional e nome
#[tokio::test]
async fn test_workstation_list_filters() {
    let transport = ScriptedTransport::new();
    transport.push_ok(vec![
        workstation(1, "Regional Centro", None),
        workstation(2, "Posto Alfa", Some(1)),
        workstation(3, "Posto Beta", Some(4)),
    ]);
    let ctx = context(&transport, Access::Admin);

    let mut page = ctx.page::<Workstation>();
    page.refresh(&ctx.gateway).await;

    let screen = WorkstationScreen {
        filters: WorkstationFilters {
            regional: Some(SelectOption::new("Regional Centro", 1)),
            nome: "alfa".into(),
        },
        ..Default::default()
    };
    let text = render_page(&page, &screen);
    assert!(text.contains("Posto Alfa"));
    assert!(!text.contains("Posto Beta"));
    assert!(!text.contains("Regional Centro"));
}

/// Login devolve a sessão com token
#[tokio::test]
async fn test_sign_in() {
    let transport = ScriptedTransport::new();
    transport.push_ok(json!({
        "token": "jwt",
        "user": {"name": "Ana", "username": "ana", "access": "manager"}
    }));
    let gateway = Gateway::new(&transport, "http://api");

    let credentials = Credentials {
        username: "ana".into(),
        password: "segredo".into(),
    };
    let session = sign_in(&gateway, &credentials).await.unwrap();
    assert_eq!(session.token.as_deref(), Some("jwt"));
    assert_eq!(session.access(), Access::Manager);
    assert_eq!(transport.sent()[0].url, "http://api/login");
}

/// Campos vazios nem chegam ao servidor
#[tokio::test]
async fn test_sign_in_requires_all_fields() {
    let transport = ScriptedTransport::new();
    let gateway = Gateway::new(&transport, "http://api");

    let credentials = Credentials {
        username: "ana".into(),
        password: String::new(),
    };
    let result = sign_in(&gateway, &credentials).await;
    assert_eq!(result.unwrap_err(), FILL_ALL_FIELDS);
    assert_eq!(transport.sent_count(), 0);
}
