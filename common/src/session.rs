//! Sessão do usuário e canal de notificação
//!
//! Ambos são colaboradores externos: o núcleo só lê a sessão e dispara
//! notificações sem esperar retorno.

use serde::{Deserialize, Serialize};

pub const ACCESS_DENIED: &str = "Acesso Negado!";

/// Nível de acesso
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    #[default]
    Basic,
    Manager,
    Admin,
}

impl Access {
    pub const ALL: [Access; 3] = [Access::Basic, Access::Manager, Access::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Access::Basic => "basic",
            Access::Manager => "manager",
            Access::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Access::Basic => "Básico",
            Access::Manager => "Gerente",
            Access::Admin => "Administrador",
        }
    }
}

impl std::fmt::Display for Access {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Access {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" => Ok(Access::Basic),
            "manager" => Ok(Access::Manager),
            "admin" => Ok(Access::Admin),
            _ => Err(format!("Acesso desconhecido: {}. Use basic, manager ou admin", s)),
        }
    }
}

/// Usuário autenticado
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    #[serde(default)]
    pub username: String,
    pub access: Access,
}

/// Sessão corrente
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: SessionUser,
    #[serde(default)]
    pub token: Option<String>,
}

impl Session {
    pub fn new(name: impl Into<String>, access: Access) -> Self {
        Self {
            user: SessionUser {
                name: name.into(),
                username: String::new(),
                access,
            },
            token: None,
        }
    }

    pub fn access(&self) -> Access {
        self.user.access
    }

    /// Nome exibido na barra lateral
    pub fn display_name(&self) -> &str {
        if self.user.name.trim().is_empty() {
            "Username"
        } else {
            &self.user.name
        }
    }
}

/// Credenciais do formulário de login
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// `data` da resposta de `POST /login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginData {
    pub token: String,
    pub user: SessionUser,
}

impl From<LoginData> for Session {
    fn from(data: LoginData) -> Self {
        Session {
            user: data.user,
            token: Some(data.token),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Canal de notificação (toast na web, stdout na CLI)
pub trait Notifier {
    fn success(&self, text: &str);
    fn error(&self, text: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn success(&self, text: &str) {
        (**self).success(text)
    }

    fn error(&self, text: &str) {
        (**self).error(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_parse() {
        assert_eq!("ADMIN".parse::<Access>().unwrap(), Access::Admin);
        assert!("root".parse::<Access>().is_err());
    }

    #[test]
    fn test_login_data_deserialize() {
        let json = r#"{"token":"abc","user":{"name":"Ana","access":"manager"}}"#;
        let data: LoginData = serde_json::from_str(json).unwrap();
        let session = Session::from(data);
        assert_eq!(session.access(), Access::Manager);
        assert_eq!(session.token.as_deref(), Some("abc"));
        assert_eq!(session.user.username, "");
    }

    #[test]
    fn test_display_name_fallback() {
        let session = Session::new(" ", Access::Basic);
        assert_eq!(session.display_name(), "Username");
    }
}
