//! Registros das entidades e payloads
//!
//! Cada entidade implementa [`Resource`]: chave de identidade estável,
//! payload de criação/edição e o recurso da API a que pertence.

use crate::constants::{ChamadoPriority, ChamadoStatus};
use crate::session::Access;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// `null` vira o valor padrão do campo
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Chave fora da tabela vira `None`
fn known_status<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<ChamadoStatus>, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.and_then(|key| ChamadoStatus::from_key(&key)))
}

fn known_priority<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<ChamadoPriority>, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.and_then(|key| ChamadoPriority::from_key(&key)))
}

/// Recursos administráveis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Chamado,
    Workstation,
    City,
    ProblemType,
    Category,
    User,
}

impl ResourceKind {
    /// Caminho base na API
    pub fn path(&self) -> &'static str {
        match self {
            ResourceKind::Chamado => "/chamados",
            ResourceKind::Workstation => "/workstations",
            ResourceKind::City => "/cities",
            ResourceKind::ProblemType => "/problem-types",
            ResourceKind::Category => "/categories",
            ResourceKind::User => "/users",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Chamado => "Chamado",
            ResourceKind::Workstation => "Posto de Trabalho",
            ResourceKind::City => "Cidade",
            ResourceKind::ProblemType => "Tipo de Problema",
            ResourceKind::Category => "Categoria",
            ResourceKind::User => "Usuário",
        }
    }

    fn is_feminine(&self) -> bool {
        matches!(self, ResourceKind::City | ResourceKind::Category)
    }

    fn participle(&self, masculine: &str) -> String {
        if self.is_feminine() {
            format!("{}a", masculine.trim_end_matches('o'))
        } else {
            masculine.to_string()
        }
    }

    /// "Cidade criada com sucesso!"
    pub fn created_message(&self) -> String {
        format!("{} {} com sucesso!", self.label(), self.participle("criado"))
    }

    pub fn updated_message(&self) -> String {
        format!("{} {} com sucesso!", self.label(), self.participle("editado"))
    }

    pub fn deleted_message(&self) -> String {
        format!("{} {} com sucesso!", self.label(), self.participle("deletado"))
    }

    /// Título do modal: "Novo Usuário" / "Nova Cidade" / "Editar Cidade"
    pub fn modal_title(&self, editing: bool) -> String {
        if editing {
            format!("Editar {}", self.label())
        } else if self.is_feminine() {
            format!("Nova {}", self.label())
        } else {
            format!("Novo {}", self.label())
        }
    }
}

/// Entidade com identidade estável
pub trait Resource: Clone {
    type Key: Clone + PartialEq + std::fmt::Display;
    type Payload: Serialize;

    const KIND: ResourceKind;

    fn key(&self) -> Self::Key;

    /// Rótulo usado em botões e confirmações
    fn display_name(&self) -> String;
}

/// Cidade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityPayload {
    pub name: String,
}

impl Resource for City {
    type Key = i64;
    type Payload = CityPayload;
    const KIND: ResourceKind = ResourceKind::City;

    fn key(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

/// Posto de trabalho
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workstation {
    pub id: i64,
    pub name: String,
    pub city_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub regional: bool,
    #[serde(default)]
    pub regional_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub adsl_vpn: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ip: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phones: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkstationPayload {
    pub name: String,
    pub city_id: i64,
    pub regional: bool,
    pub regional_id: Option<i64>,
    pub adsl_vpn: bool,
    pub ip: String,
    pub link: String,
    pub phones: Vec<String>,
}

impl Resource for Workstation {
    type Key = i64;
    type Payload = WorkstationPayload;
    const KIND: ResourceKind = ResourceKind::Workstation;

    fn key(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

/// Tipo de problema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemType {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub category_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemTypePayload {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

impl Resource for ProblemType {
    type Key = i64;
    type Payload = ProblemTypePayload;
    const KIND: ResourceKind = ResourceKind::ProblemType;

    fn key(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

/// Categoria de problema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub problem_types: Vec<ProblemType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
    pub description: String,
}

impl Resource for Category {
    type Key = i64;
    type Payload = CategoryPayload;
    const KIND: ResourceKind = ResourceKind::Category;

    fn key(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

/// Usuário. O backend grafa o nível de acesso como `acess`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active: bool,
    pub acess: Access,
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_role: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserPayload {
    pub username: String,
    pub email: String,
    pub name: String,
    pub acess: Access,
    #[serde(rename = "job_role")]
    pub job_role: String,
    pub password: String,
    pub confirm_password: String,
}

impl Resource for User {
    type Key = String;
    type Payload = RegisterUserPayload;
    const KIND: ResourceKind = ResourceKind::User;

    fn key(&self) -> String {
        self.username.clone()
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

/// Problema associado a um chamado
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChamadoProblem {
    pub problem_id: i64,
    pub category_id: i64,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub problem: Option<ProblemType>,
}

/// Chamado (ticket de atendimento)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chamado {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub applicant_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub applicant_phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attendant_name: String,
    #[serde(default)]
    pub workstation_id: Option<i64>,
    #[serde(default)]
    pub city_id: Option<i64>,
    #[serde(default, deserialize_with = "known_status")]
    pub status: Option<ChamadoStatus>,
    #[serde(default, deserialize_with = "known_priority")]
    pub priority: Option<ChamadoPriority>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub problems: Vec<ChamadoProblem>,
}

/// Referência categoria/problema no payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRef {
    pub category_id: i64,
    pub problem_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChamadoPayload {
    pub applicant_name: String,
    pub applicant_phone: String,
    pub attendant_name: String,
    pub workstation_id: Option<i64>,
    pub city_id: Option<i64>,
    pub status: Option<ChamadoStatus>,
    pub priority: Option<ChamadoPriority>,
    pub description: String,
    pub problems: Vec<ProblemRef>,
}

impl Resource for Chamado {
    type Key = i64;
    type Payload = ChamadoPayload;
    const KIND: ResourceKind = ResourceKind::Chamado;

    fn key(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        "Chamado".to_string()
    }
}

impl Workstation {
    /// Nome da cidade ou "-" se a lista ainda não tem a cidade
    pub fn city_name<'a>(&self, cities: &'a [City]) -> &'a str {
        cities
            .iter()
            .find(|c| c.id == self.city_id)
            .map_or("-", |c| c.name.as_str())
    }

    /// Selos exibidos na linha
    pub fn badges(&self) -> Vec<String> {
        let mut badges = Vec::new();
        if self.regional {
            badges.push("Regional".to_string());
        }
        if self.adsl_vpn {
            badges.push("ADSL_VPN".to_string());
        } else {
            if !self.ip.is_empty() {
                badges.push(format!("IP: {}", self.ip));
            }
            if !self.link.is_empty() {
                badges.push(format!("Link: {}", self.link));
            }
        }
        badges
    }
}

impl Chamado {
    /// "Categoria: Problema" para cada problema com nomes carregados
    pub fn problem_tags(&self) -> Vec<String> {
        self.problems
            .iter()
            .filter_map(|p| match (&p.category, &p.problem) {
                (Some(category), Some(problem)) => Some(format!("{}: {}", category.name, problem.name)),
                (None, Some(problem)) => Some(problem.name.clone()),
                _ => None,
            })
            .collect()
    }
}
