//! Login, logout e menu lateral

use crate::config::Config;
use crate::error::{Result, SchedulaError};
use crate::prompts;
use schedula_common::form::{FieldErrors, Validate};
use schedula_common::forms::FILL_ALL_FIELDS;
use schedula_common::routes::ROUTES;
use schedula_common::session::Credentials;
use schedula_common::{Gateway, Session, Transport};

pub use schedula_common::services::sign_in;

/// Pergunta as credenciais até entrar ou desistir
pub async fn login_interactive<T: Transport>(
    config: &mut Config,
    gateway: &Gateway<T>,
    username: Option<String>,
) -> Result<()> {
    let mut credentials = Credentials {
        username: username.unwrap_or_default(),
        password: String::new(),
    };
    let mut errors = FieldErrors::default();

    loop {
        prompts::fill_credentials(&mut credentials, &errors)?;
        errors = credentials.validate();
        if !errors.is_empty() {
            eprintln!("✖ {}", FILL_ALL_FIELDS);
            continue;
        }

        match sign_in(gateway, &credentials).await {
            Ok(session) => {
                println!("✔ Bem-vindo, {}", session.display_name());
                config.session = Some(session);
                config.save()?;
                return Ok(());
            }
            Err(message) => {
                eprintln!("✖ {}", message);
                if !prompts::flag("Tentar novamente?", true)? {
                    return Err(SchedulaError::Login(message));
                }
            }
        }
    }
}

/// Texto do menu lateral
pub fn sidebar(session: Option<&Session>) -> String {
    let mut out = String::from("Schedula\n");
    for route in ROUTES {
        out.push_str(&format!(
            "  {:<20} schedula {}\n",
            route.label,
            route.path.trim_start_matches('/')
        ));
    }
    let user = session.map_or("Username", Session::display_name);
    out.push_str(&format!("\n{}  (schedula logout para sair)", user));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use schedula_common::session::Access;

    #[test]
    fn test_sidebar_lists_routes_and_user() {
        let session = Session::new("Ana", Access::Admin);
        let text = sidebar(Some(&session));
        assert!(text.starts_with("Schedula\n"));
        assert!(text.contains("schedula cidades"));
        assert!(text.contains("Postos de Trabalho"));
        assert!(text.ends_with("Ana  (schedula logout para sair)"));
    }

    #[test]
    fn test_sidebar_without_name() {
        let text = sidebar(Some(&Session::new("", Access::Basic)));
        assert!(text.contains("Username"));
    }
}
