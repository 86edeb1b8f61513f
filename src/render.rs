//! Renderização das listas em texto

use schedula_common::constants::ChamadoStatus;
use schedula_common::format::{format_date, DateFormat};
use schedula_common::item::ItemActions;
use schedula_common::list::{ListView, EMPTY_MESSAGE, LOADING_MESSAGE};
use schedula_common::types::{Category, Chamado, City, ProblemType, User, Workstation};
use schedula_common::{Action, Resource, Session};

/// Linha de lista: título + descrição
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub title: String,
    pub description: Vec<String>,
}

impl Row {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Vec::new(),
        }
    }

    pub fn line(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.trim().is_empty() {
            self.description.push(text);
        }
        self
    }
}

/// Lista com índices e as ações permitidas de cada linha
pub fn render_list<R: Resource>(
    view: &ListView<'_, R>,
    session: &Session,
    offered: &[Action],
    row: impl Fn(&R) -> Row,
) -> String {
    let mut index = 0;
    view.render(
        |item| {
            index += 1;
            let actions = ItemActions::for_actions(item.clone(), session, offered);
            render_row(index, &row(item), &actions)
        },
        || LOADING_MESSAGE.to_string(),
        || EMPTY_MESSAGE.to_string(),
    )
    .join("\n")
}

fn render_row<R: Resource>(index: usize, row: &Row, actions: &ItemActions<R>) -> String {
    let mut out = format!("{:>3}. {}", index, row.title);
    let mut hints = Vec::new();
    if actions.can_edit {
        hints.push("[editar]");
    }
    if actions.can_delete {
        hints.push("[excluir]");
    }
    if !hints.is_empty() {
        out.push_str(&format!("  {}", hints.join(" ")));
    }
    for line in &row.description {
        out.push_str(&format!("\n     {}", line));
    }
    out
}

pub fn city_row(city: &City) -> Row {
    Row::new(&city.name).line(format!("#{}", city.id))
}

pub fn workstation_row(cities: &[City]) -> impl Fn(&Workstation) -> Row + '_ {
    move |ws: &Workstation| {
        Row::new(&ws.name)
            .line(format!("Cidade: {}", ws.city_name(cities)))
            .line(ws.badges().join(" | "))
            .line(ws.phones.join(", "))
    }
}

pub fn problem_type_row(problem: &ProblemType) -> Row {
    Row::new(&problem.name).line(&problem.description)
}

pub fn category_row(category: &Category) -> Row {
    let problems: Vec<&str> = category
        .problem_types
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    Row::new(&category.name)
        .line(&category.description)
        .line(problems.join(", "))
}

pub fn user_row(user: &User) -> Row {
    let status = if user.active { "Ativo" } else { "Inativo" };
    Row::new(&user.name)
        .line(format!("{} <{}>", user.username, user.email))
        .line(format!("{} | {} | {}", user.acess.label(), user.job_role, status))
}

pub fn chamado_row(chamado: &Chamado) -> Row {
    let status = chamado
        .status
        .map(|s| s.label())
        .unwrap_or(ChamadoStatus::Pending.label());
    Row::new(format!("#{} {}", chamado.id, chamado.applicant_name))
        .line(format!(
            "{} {} | {} | Atendente: {}",
            format_date(chamado.created_at.as_ref(), DateFormat::Date),
            format_date(chamado.created_at.as_ref(), DateFormat::Time),
            status,
            if chamado.attendant_name.is_empty() { "-" } else { chamado.attendant_name.as_str() },
        ))
        .line(chamado.problem_tags().join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use schedula_common::session::Access;

    #[test]
    fn test_render_items_with_actions() {
        let cities = vec![City { id: 1, name: "Goiânia".into() }];
        let view = ListView::state(Some(cities.as_slice()), false);
        let session = Session::new("Ana", Access::Basic);
        let text = render_list(&view, &session, &[Action::Edit, Action::Delete], city_row);
        assert_eq!(text, "  1. Goiânia  [editar] [excluir]\n     #1");
    }

    #[test]
    fn test_render_loading_and_empty() {
        let session = Session::new("Ana", Access::Basic);
        let loading: ListView<'_, City> = ListView::state(None, true);
        assert_eq!(render_list(&loading, &session, &[], city_row), LOADING_MESSAGE);
        let empty: ListView<'_, City> = ListView::state(Some(&[][..]), false);
        assert_eq!(render_list(&empty, &session, &[], city_row), EMPTY_MESSAGE);
    }

    #[test]
    fn test_basic_sees_no_workstation_hints() {
        let ws = Workstation {
            id: 1,
            name: "Posto".into(),
            city_id: 9,
            regional: false,
            regional_id: None,
            adsl_vpn: true,
            ip: String::new(),
            link: String::new(),
            phones: vec!["(62) 3201-4455".into()],
        };
        let items = vec![ws];
        let view = ListView::state(Some(items.as_slice()), false);
        let session = Session::new("Ana", Access::Basic);
        let text = render_list(&view, &session, &[Action::Edit, Action::Delete], workstation_row(&[]));
        assert_eq!(
            text,
            "  1. Posto\n     Cidade: -\n     ADSL_VPN\n     (62) 3201-4455"
        );
    }
}
