//! Formulários interativos
//!
//! Cada `fill_*` pergunta os campos usando os valores atuais como texto
//! inicial, então um reenvio após erro mantém tudo o que foi digitado.
//! O erro de cada campo aparece ao lado do rótulo.

use crate::error::Result;
use dialoguer::{Confirm, Input, Password, Select};
use schedula_common::form::FieldErrors;
use schedula_common::forms::{
    access_options, priority_options, status_options, CategoriaFormValues, ChamadoFormValues,
    CityFormValues, PhoneField, ProblemFormValue, UserFormValues, WorkstationFormValues,
};
use schedula_common::select::SelectOption;
use schedula_common::session::Credentials;

const NONE_LABEL: &str = "(nenhum)";

/// "Nome [Campo obrigatório]"
pub fn label_with_error(label: &str, error: Option<&str>) -> String {
    match error {
        Some(error) => format!("{} [{}]", label, error),
        None => label.to_string(),
    }
}

pub fn text(label: &str, current: &str, error: Option<&str>) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(label_with_error(label, error))
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

pub fn secret(label: &str, error: Option<&str>) -> Result<String> {
    let value = Password::new()
        .with_prompt(label_with_error(label, error))
        .allow_empty_password(true)
        .interact()?;
    Ok(value)
}

pub fn flag(label: &str, current: bool) -> Result<bool> {
    let value = Confirm::new()
        .with_prompt(label)
        .default(current)
        .interact()?;
    Ok(value)
}

/// Select com a opção "(nenhum)" no topo
pub fn select(
    label: &str,
    options: &[SelectOption],
    current: Option<&SelectOption>,
    error: Option<&str>,
) -> Result<Option<SelectOption>> {
    let mut labels = vec![NONE_LABEL.to_string()];
    labels.extend(options.iter().map(|o| o.label.clone()));
    let default = current
        .and_then(|c| options.iter().position(|o| o.value == c.value))
        .map_or(0, |i| i + 1);

    let index = Select::new()
        .with_prompt(label_with_error(label, error))
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(index.checked_sub(1).and_then(|i| options.get(i)).cloned())
}

/// Telefones digitados separados por vírgula
pub fn parse_phones(input: &str) -> Vec<PhoneField> {
    input
        .split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(|n| PhoneField {
            number: n.to_string(),
        })
        .collect()
}

fn phones_error(errors: &FieldErrors) -> Option<&str> {
    errors
        .iter()
        .find(|(field, _)| field.starts_with("phones."))
        .map(|(_, message)| message)
}

pub fn fill_credentials(values: &mut Credentials, errors: &FieldErrors) -> Result<()> {
    values.username = text("Usuário", &values.username, errors.get("username"))?;
    values.password = secret("Senha", errors.get("password"))?;
    Ok(())
}

pub fn fill_city(values: &mut CityFormValues, errors: &FieldErrors) -> Result<()> {
    values.name = text("Nome", &values.name, errors.get("name"))?;
    Ok(())
}

pub fn fill_categoria(values: &mut CategoriaFormValues, errors: &FieldErrors) -> Result<()> {
    values.name = text("Nome", &values.name, errors.get("name"))?;
    values.description = text("Descrição", &values.description, errors.get("description"))?;
    Ok(())
}

pub fn fill_workstation(
    values: &mut WorkstationFormValues,
    errors: &FieldErrors,
    cities: &[SelectOption],
    regionais: &[SelectOption],
) -> Result<()> {
    values.name = text("Nome", &values.name, errors.get("name"))?;
    values.city = select("Cidade", cities, values.city.as_ref(), errors.get("city"))?;
    values.regional = flag("É regional?", values.regional)?;
    if !values.regional {
        values.regional_parent = select(
            "Regional",
            regionais,
            values.regional_parent.as_ref(),
            errors.get("regional_parent"),
        )?;
    } else {
        values.regional_parent = None;
    }
    values.adsl_vpn = flag("ADSL/VPN?", values.adsl_vpn)?;
    if !values.adsl_vpn {
        values.ip = text("IP", &values.ip, errors.get("ip"))?;
        values.link = text("Link", &values.link, errors.get("link"))?;
    }
    let current: Vec<&str> = values.phones.iter().map(|p| p.number.as_str()).collect();
    let phones = text(
        "Telefones (separados por vírgula)",
        &current.join(", "),
        phones_error(errors),
    )?;
    values.phones = parse_phones(&phones);
    Ok(())
}

pub fn fill_user(values: &mut UserFormValues, errors: &FieldErrors) -> Result<()> {
    values.username = text("Usuário", &values.username, errors.get("username"))?;
    values.name = text("Nome", &values.name, errors.get("name"))?;
    values.email = text("E-mail", &values.email, errors.get("email"))?;
    values.job_role = text("Cargo", &values.job_role, errors.get("job_role"))?;
    values.acess = select(
        "Nível de acesso",
        &access_options(),
        values.acess.as_ref(),
        errors.get("acess"),
    )?;
    values.password = secret("Senha", errors.get("password"))?;
    values.confirm_password = secret("Confirmar senha", errors.get("confirm_password"))?;
    Ok(())
}

/// Opções carregadas para o formulário de chamado
#[derive(Debug, Clone, Default)]
pub struct ChamadoOptions {
    pub workstations: Vec<SelectOption>,
    pub cities: Vec<SelectOption>,
    pub categories: Vec<SelectOption>,
    /// Problemas por categoria (valor da opção da categoria)
    pub problems: Vec<(String, Vec<SelectOption>)>,
}

impl ChamadoOptions {
    pub fn problems_of(&self, category: &SelectOption) -> &[SelectOption] {
        self.problems
            .iter()
            .find(|(value, _)| *value == category.value)
            .map_or(&[][..], |(_, options)| options.as_slice())
    }
}

pub fn fill_chamado(
    values: &mut ChamadoFormValues,
    errors: &FieldErrors,
    options: &ChamadoOptions,
) -> Result<()> {
    values.applicant_name = text("Solicitante", &values.applicant_name, errors.get("applicant_name"))?;
    values.applicant_phone = text("Telefone", &values.applicant_phone, errors.get("applicant_phone"))?;
    values.attendant_name = text("Atendente", &values.attendant_name, errors.get("attendant_name"))?;
    values.workstation = select(
        "Posto de trabalho",
        &options.workstations,
        values.workstation.as_ref(),
        errors.get("workstation"),
    )?;
    values.city = select("Cidade", &options.cities, values.city.as_ref(), errors.get("city"))?;
    values.status = select("Status", &status_options(), values.status.as_ref(), errors.get("status"))?;
    values.priority = select(
        "Prioridade",
        &priority_options(),
        values.priority.as_ref(),
        errors.get("priority"),
    )?;
    values.description = text("Descrição", &values.description, errors.get("description"))?;

    if !values.problems.is_empty() {
        let tags: Vec<String> = values
            .problems
            .iter()
            .filter_map(|p| Some(format!("{}: {}", p.category.as_ref()?.label, p.problem.as_ref()?.label)))
            .collect();
        println!("  Problemas: {}", tags.join(", "));
    }
    if let Some(error) = errors.get("problems") {
        println!("  ✖ {}", error);
    }
    if flag("Redefinir problemas?", values.problems.is_empty())? {
        values.problems = prompt_problems(options)?;
    }
    Ok(())
}

fn prompt_problems(options: &ChamadoOptions) -> Result<Vec<ProblemFormValue>> {
    let mut problems = Vec::new();
    loop {
        let Some(category) = select("Categoria", &options.categories, None, None)? else {
            break;
        };
        let problem = select("Problema", options.problems_of(&category), None, None)?;
        problems.push(ProblemFormValue {
            category: Some(category),
            problem,
        });
        if !flag("Adicionar outro problema?", false)? {
            break;
        }
    }
    Ok(problems)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_with_error() {
        assert_eq!(label_with_error("Nome", None), "Nome");
        assert_eq!(
            label_with_error("Nome", Some("Campo obrigatório")),
            "Nome [Campo obrigatório]"
        );
    }

    #[test]
    fn test_parse_phones() {
        let phones = parse_phones(" (62) 3201-4455 , ,62999998888");
        assert_eq!(phones.len(), 2);
        assert_eq!(phones[0].number, "(62) 3201-4455");
        assert_eq!(phones[1].number, "62999998888");
        assert!(parse_phones("").is_empty());
    }

    #[test]
    fn test_problems_of_category() {
        let options = ChamadoOptions {
            problems: vec![("1".into(), vec![SelectOption::new("Sem internet", 2)])],
            ..Default::default()
        };
        assert_eq!(options.problems_of(&SelectOption::new("Rede", 1)).len(), 1);
        assert!(options.problems_of(&SelectOption::new("Outro", 9)).is_empty());
    }
}
