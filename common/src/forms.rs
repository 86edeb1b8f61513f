//! Valores dos formulários de cada entidade
//!
//! Os valores espelham os campos da tela (selects guardam `SelectOption`,
//! telefones ficam numa lista de `{number}`) e são convertidos no payload da
//! API apenas no envio.

use crate::constants::{ChamadoPriority, ChamadoStatus};
use crate::form::{check_rules, FieldErrors, Pattern, Rule, Validate, REQUIRED_MESSAGE};
use crate::select::SelectOption;
use crate::session::{Access, Credentials};
use crate::types::{
    Category, CategoryPayload, Chamado, ChamadoPayload, City, CityPayload, ProblemRef,
    ProblemType, ProblemTypePayload, RegisterUserPayload, User, Workstation, WorkstationPayload,
};
use serde::{Deserialize, Serialize};

pub const FILL_ALL_FIELDS: &str = "Preencha todos os campos";

fn text(value: &str) -> Option<String> {
    Some(value.to_string()).filter(|v| !v.trim().is_empty())
}

fn option_value(option: &Option<SelectOption>) -> Option<String> {
    option.as_ref().map(|o| o.value.clone())
}

/// Formulário compartilhado por categoria e tipo de problema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriaFormValues {
    pub name: String,
    pub description: String,
}

impl Validate for CategoriaFormValues {
    const RULES: &'static [(&'static str, &'static [Rule])] = &[
        ("name", &[Rule::Required(REQUIRED_MESSAGE)]),
        ("description", &[Rule::Required(REQUIRED_MESSAGE)]),
    ];

    fn value(&self, field: &str) -> Option<String> {
        match field {
            "name" => text(&self.name),
            "description" => text(&self.description),
            _ => None,
        }
    }
}

impl From<&Category> for CategoriaFormValues {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone(),
        }
    }
}

impl From<&ProblemType> for CategoriaFormValues {
    fn from(problem: &ProblemType) -> Self {
        Self {
            name: problem.name.clone(),
            description: problem.description.clone(),
        }
    }
}

impl From<CategoriaFormValues> for CategoryPayload {
    fn from(values: CategoriaFormValues) -> Self {
        Self {
            name: values.name.trim().to_string(),
            description: values.description.trim().to_string(),
        }
    }
}

impl From<CategoriaFormValues> for ProblemTypePayload {
    fn from(values: CategoriaFormValues) -> Self {
        Self {
            name: values.name.trim().to_string(),
            description: values.description.trim().to_string(),
            category_id: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityFormValues {
    pub name: String,
}

impl Validate for CityFormValues {
    const RULES: &'static [(&'static str, &'static [Rule])] =
        &[("name", &[Rule::Required(REQUIRED_MESSAGE)])];

    fn value(&self, field: &str) -> Option<String> {
        match field {
            "name" => text(&self.name),
            _ => None,
        }
    }
}

impl From<&City> for CityFormValues {
    fn from(city: &City) -> Self {
        Self {
            name: city.name.clone(),
        }
    }
}

impl From<CityFormValues> for CityPayload {
    fn from(values: CityFormValues) -> Self {
        Self {
            name: values.name.trim().to_string(),
        }
    }
}

/// Campo dinâmico de telefone
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneField {
    pub number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkstationFormValues {
    pub name: String,
    pub city: Option<SelectOption>,
    pub regional: bool,
    pub regional_parent: Option<SelectOption>,
    pub adsl_vpn: bool,
    pub ip: String,
    pub link: String,
    pub phones: Vec<PhoneField>,
}

impl WorkstationFormValues {
    /// Valores iniciais a partir do registro e das opções carregadas
    pub fn from_workstation(
        workstation: &Workstation,
        cities: &[SelectOption],
        regionais: &[SelectOption],
    ) -> Self {
        // opções ainda não carregadas: mantém o id com ele mesmo como rótulo
        let pick = |options: &[SelectOption], id: Option<i64>| {
            id.map(|id| {
                options
                    .iter()
                    .find(|o| o.id() == Some(id))
                    .cloned()
                    .unwrap_or_else(|| SelectOption::new(id.to_string(), id))
            })
        };
        Self {
            name: workstation.name.clone(),
            city: pick(cities, Some(workstation.city_id)),
            regional: workstation.regional,
            regional_parent: pick(regionais, workstation.regional_id),
            adsl_vpn: workstation.adsl_vpn,
            ip: workstation.ip.clone(),
            link: workstation.link.clone(),
            phones: workstation
                .phones
                .iter()
                .map(|number| PhoneField {
                    number: number.clone(),
                })
                .collect(),
        }
    }

    /// Payload da API. `None` se a cidade não foi escolhida.
    pub fn to_payload(&self) -> Option<WorkstationPayload> {
        let city_id = self.city.as_ref()?.id()?;
        Some(WorkstationPayload {
            name: self.name.trim().to_string(),
            city_id,
            regional: self.regional,
            regional_id: self.regional_parent.as_ref().and_then(SelectOption::id),
            adsl_vpn: self.adsl_vpn,
            ip: if self.adsl_vpn { String::new() } else { self.ip.trim().to_string() },
            link: if self.adsl_vpn { String::new() } else { self.link.trim().to_string() },
            phones: self
                .phones
                .iter()
                .map(|p| p.number.trim().to_string())
                .filter(|n| !n.is_empty())
                .collect(),
        })
    }
}

impl Validate for WorkstationFormValues {
    const RULES: &'static [(&'static str, &'static [Rule])] = &[
        ("name", &[Rule::Required(REQUIRED_MESSAGE)]),
        ("city", &[Rule::Required(REQUIRED_MESSAGE)]),
        ("ip", &[Rule::Pattern(Pattern::Ipv4, "IP inválido")]),
    ];

    fn value(&self, field: &str) -> Option<String> {
        match field {
            "name" => text(&self.name),
            "city" => option_value(&self.city),
            // ADSL/VPN não usa IP fixo
            "ip" if !self.adsl_vpn => text(&self.ip),
            _ => None,
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = check_rules(self);
        for (index, phone) in self.phones.iter().enumerate() {
            let number = phone.number.trim();
            if !number.is_empty() && !Pattern::Phone.matches(number) {
                errors.insert(&format!("phones.{}.number", index), "Telefone inválido");
            }
        }
        errors
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFormValues {
    pub username: String,
    pub email: String,
    pub name: String,
    pub job_role: String,
    pub acess: Option<SelectOption>,
    pub password: String,
    pub confirm_password: String,
}

/// Opções do select de acesso
pub fn access_options() -> Vec<SelectOption> {
    Access::ALL
        .iter()
        .map(|a| SelectOption::new(a.label(), a.as_str()))
        .collect()
}

impl From<&User> for UserFormValues {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            job_role: user.job_role.clone(),
            acess: Some(SelectOption::new(user.acess.label(), user.acess.as_str())),
            password: String::new(),
            confirm_password: String::new(),
        }
    }
}

impl UserFormValues {
    pub fn to_payload(&self) -> RegisterUserPayload {
        let acess = self
            .acess
            .as_ref()
            .and_then(|o| o.value.parse().ok())
            .unwrap_or_default();
        RegisterUserPayload {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            name: self.name.trim().to_string(),
            acess,
            job_role: self.job_role.trim().to_string(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        }
    }
}

impl Validate for UserFormValues {
    const RULES: &'static [(&'static str, &'static [Rule])] = &[
        ("username", &[Rule::Required(REQUIRED_MESSAGE)]),
        (
            "email",
            &[
                Rule::Required(REQUIRED_MESSAGE),
                Rule::Pattern(Pattern::Email, "E-mail inválido"),
            ],
        ),
        ("name", &[Rule::Required(REQUIRED_MESSAGE)]),
        ("job_role", &[Rule::Required(REQUIRED_MESSAGE)]),
        ("acess", &[Rule::Required(REQUIRED_MESSAGE)]),
        (
            "password",
            &[
                Rule::Required(REQUIRED_MESSAGE),
                Rule::MinLength(6, "A senha deve ter ao menos 6 caracteres"),
            ],
        ),
        (
            "confirm_password",
            &[
                Rule::Required(REQUIRED_MESSAGE),
                Rule::SameAs("password", "As senhas não conferem"),
            ],
        ),
    ];

    fn value(&self, field: &str) -> Option<String> {
        match field {
            "username" => text(&self.username),
            "email" => text(&self.email),
            "name" => text(&self.name),
            "job_role" => text(&self.job_role),
            "acess" => option_value(&self.acess),
            "password" => text(&self.password),
            "confirm_password" => text(&self.confirm_password),
            _ => None,
        }
    }
}

/// Par categoria/problema no formulário de chamado
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemFormValue {
    pub category: Option<SelectOption>,
    pub problem: Option<SelectOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChamadoFormValues {
    pub applicant_name: String,
    pub applicant_phone: String,
    pub attendant_name: String,
    pub workstation: Option<SelectOption>,
    pub city: Option<SelectOption>,
    pub status: Option<SelectOption>,
    pub priority: Option<SelectOption>,
    pub description: String,
    pub problems: Vec<ProblemFormValue>,
}

pub fn status_options() -> Vec<SelectOption> {
    ChamadoStatus::ALL
        .iter()
        .map(|s| SelectOption::new(s.label(), s.as_str()))
        .collect()
}

pub fn priority_options() -> Vec<SelectOption> {
    ChamadoPriority::ALL
        .iter()
        .map(|p| SelectOption::new(p.label(), p.as_str()))
        .collect()
}

/// Chamado → valores do formulário de edição
pub fn chamado_to_form_values(chamado: &Chamado) -> ChamadoFormValues {
    ChamadoFormValues {
        applicant_name: chamado.applicant_name.clone(),
        applicant_phone: chamado.applicant_phone.clone(),
        attendant_name: chamado.attendant_name.clone(),
        workstation: chamado
            .workstation_id
            .map(|id| SelectOption::new(id.to_string(), id)),
        city: chamado.city_id.map(|id| SelectOption::new(id.to_string(), id)),
        status: chamado
            .status
            .map(|s| SelectOption::new(s.label(), s.as_str())),
        priority: chamado
            .priority
            .map(|p| SelectOption::new(p.label(), p.as_str())),
        description: chamado.description.clone(),
        problems: chamado
            .problems
            .iter()
            .map(|p| ProblemFormValue {
                category: Some(SelectOption::new(
                    p.category
                        .as_ref()
                        .map(|c| c.name.clone())
                        .unwrap_or_else(|| p.category_id.to_string()),
                    p.category_id,
                )),
                problem: Some(SelectOption::new(
                    p.problem
                        .as_ref()
                        .map(|t| t.name.clone())
                        .unwrap_or_else(|| p.problem_id.to_string()),
                    p.problem_id,
                )),
            })
            .collect(),
    }
}

/// Valores do formulário → payload. Pares incompletos são descartados.
pub fn form_values_to_payload(values: &ChamadoFormValues) -> ChamadoPayload {
    ChamadoPayload {
        applicant_name: values.applicant_name.trim().to_string(),
        applicant_phone: values.applicant_phone.trim().to_string(),
        attendant_name: values.attendant_name.trim().to_string(),
        workstation_id: values.workstation.as_ref().and_then(SelectOption::id),
        city_id: values.city.as_ref().and_then(SelectOption::id),
        status: values
            .status
            .as_ref()
            .and_then(|o| ChamadoStatus::from_key(&o.value)),
        priority: values
            .priority
            .as_ref()
            .and_then(|o| ChamadoPriority::from_key(&o.value)),
        description: values.description.trim().to_string(),
        problems: values
            .problems
            .iter()
            .filter_map(|p| {
                Some(ProblemRef {
                    category_id: p.category.as_ref()?.id()?,
                    problem_id: p.problem.as_ref()?.id()?,
                })
            })
            .collect(),
    }
}

impl Validate for ChamadoFormValues {
    const RULES: &'static [(&'static str, &'static [Rule])] = &[
        ("applicant_name", &[Rule::Required(REQUIRED_MESSAGE)]),
        (
            "applicant_phone",
            &[Rule::Pattern(Pattern::Phone, "Telefone inválido")],
        ),
        ("attendant_name", &[Rule::Required(REQUIRED_MESSAGE)]),
        ("workstation", &[Rule::Required(REQUIRED_MESSAGE)]),
        ("status", &[Rule::Required(REQUIRED_MESSAGE)]),
        ("problems", &[Rule::Required("Informe ao menos um problema")]),
    ];

    fn value(&self, field: &str) -> Option<String> {
        match field {
            "applicant_name" => text(&self.applicant_name),
            "applicant_phone" => text(&self.applicant_phone),
            "attendant_name" => text(&self.attendant_name),
            "workstation" => option_value(&self.workstation),
            "status" => option_value(&self.status),
            "problems" => {
                let complete = self
                    .problems
                    .iter()
                    .filter(|p| p.category.is_some() && p.problem.is_some())
                    .count();
                (complete > 0).then(|| complete.to_string())
            }
            _ => None,
        }
    }
}

impl Validate for Credentials {
    const RULES: &'static [(&'static str, &'static [Rule])] = &[
        ("username", &[Rule::Required(FILL_ALL_FIELDS)]),
        ("password", &[Rule::Required(FILL_ALL_FIELDS)]),
    ];

    fn value(&self, field: &str) -> Option<String> {
        match field {
            "username" => text(&self.username),
            "password" => Some(self.password.clone()).filter(|p| !p.is_empty()),
            _ => None,
        }
    }
}
