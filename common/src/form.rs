//! Validação declarativa de formulários
//!
//! Cada formulário declara `RULES` por campo; `validate` devolve as mensagens
//! por campo. Erros de campo nunca chegam à rede.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

pub const REQUIRED_MESSAGE: &str = "Campo obrigatório";

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$").unwrap();
    static ref IPV4_RE: Regex =
        Regex::new(r"^((25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)\.){3}(25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)$").unwrap();
    static ref PHONE_RE: Regex = Regex::new(r"^\(?\d{2}\)?\s?\d{4,5}-?\d{4}$").unwrap();
}

/// Padrões reconhecidos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Email,
    Ipv4,
    Phone,
}

impl Pattern {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Pattern::Email => EMAIL_RE.is_match(value),
            Pattern::Ipv4 => IPV4_RE.is_match(value),
            Pattern::Phone => PHONE_RE.is_match(value),
        }
    }
}

/// Regra de um campo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required(&'static str),
    /// Só avaliada quando o campo tem valor
    Pattern(Pattern, &'static str),
    MinLength(usize, &'static str),
    /// Deve ser igual ao campo indicado
    SameAs(&'static str, &'static str),
}

/// Mensagens de erro por campo
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Mantém só o primeiro erro de cada campo
    pub fn insert(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Valores de um formulário com regras declaradas
pub trait Validate {
    const RULES: &'static [(&'static str, &'static [Rule])];

    /// Valor textual do campo; `None` quando vazio/não selecionado
    fn value(&self, field: &str) -> Option<String>;

    fn validate(&self) -> FieldErrors {
        check_rules(self)
    }
}

/// Aplica apenas as regras declaradas em `RULES`
pub fn check_rules<V: Validate + ?Sized>(values: &V) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for (field, rules) in V::RULES {
        let value = values.value(field).filter(|v| !v.trim().is_empty());
        for rule in rules.iter() {
            if let Some(message) = check(rule, value.as_deref(), |other| values.value(other)) {
                errors.insert(field, message);
            }
        }
    }
    errors
}

fn check(
    rule: &Rule,
    value: Option<&str>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<&'static str> {
    match (*rule, value) {
        (Rule::Required(message), None) => Some(message),
        (Rule::Pattern(pattern, message), Some(v)) if !pattern.matches(v.trim()) => Some(message),
        (Rule::MinLength(min, message), Some(v)) if v.chars().count() < min => Some(message),
        (Rule::SameAs(other, message), v) if lookup(other).as_deref() != v => Some(message),
        _ => None,
    }
}

/// Estado do botão de envio
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitState {
    pub is_submitting: bool,
    /// Erro do servidor exibido no formulário
    pub error: Option<String>,
}

impl SubmitState {
    /// Retorna `false` se já há um envio em andamento
    pub fn begin(&mut self) -> bool {
        if self.is_submitting {
            return false;
        }
        self.is_submitting = true;
        self.error = None;
        true
    }

    pub fn finish(&mut self, outcome: Result<(), String>) {
        self.is_submitting = false;
        self.error = outcome.err();
    }
}
