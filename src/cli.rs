use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "schedula")]
#[command(about = "Schedula - administração do service desk", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log detalhado
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Entrar e guardar a sessão
    Login {
        /// Usuário (perguntado se omitido)
        #[arg(short, long)]
        username: Option<String>,
    },

    /// Encerrar a sessão
    Logout,

    /// Mostrar/editar a configuração
    Config {
        /// URL base da API
        #[arg(long)]
        api_url: Option<String>,

        /// Mostrar configuração
        #[arg(long)]
        show: bool,
    },

    /// Menu lateral: rotas e usuário logado
    Menu,

    /// Chamados
    Chamados {
        #[command(subcommand)]
        action: ChamadoAction,
    },

    /// Postos de trabalho
    #[command(alias = "postos")]
    Workstation {
        /// Filtrar pela regional (id)
        #[arg(long, global = true)]
        regional: Option<i64>,

        /// Filtrar pelo nome
        #[arg(long, global = true)]
        nome: Option<String>,

        #[command(subcommand)]
        action: CrudAction,
    },

    /// Cidades
    Cidades {
        #[command(subcommand)]
        action: CrudAction,
    },

    /// Tipos de problema
    Problemas {
        #[command(subcommand)]
        action: CrudAction,
    },

    /// Categorias de problema
    Categorias {
        #[command(subcommand)]
        action: CrudAction,
    },

    /// Usuários
    Usuarios {
        #[command(subcommand)]
        action: CrudAction,
    },
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum CrudAction {
    /// Listar
    #[command(alias = "ls")]
    List,

    /// Criar
    Create,

    /// Editar
    Edit {
        /// Chave do item (id ou username)
        key: String,
    },

    /// Excluir
    #[command(alias = "rm")]
    Delete {
        /// Chave do item (id ou username)
        key: String,

        /// Não pedir confirmação
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum ChamadoAction {
    /// Listar
    #[command(alias = "ls")]
    List,

    /// Editar
    Edit {
        /// Id do chamado
        id: i64,
    },
}

impl From<ChamadoAction> for CrudAction {
    fn from(action: ChamadoAction) -> Self {
        match action {
            ChamadoAction::List => CrudAction::List,
            ChamadoAction::Edit { id } => CrudAction::Edit {
                key: id.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_workstation_filters() {
        let cli = Cli::try_parse_from(["schedula", "postos", "list", "--regional", "3", "--nome", "centro"]).unwrap();
        match cli.command {
            Commands::Workstation { regional, nome, action } => {
                assert_eq!(regional, Some(3));
                assert_eq!(nome.as_deref(), Some("centro"));
                assert_eq!(action, CrudAction::List);
            }
            _ => panic!("expected workstation command"),
        }
    }

    #[test]
    fn test_parse_delete_with_yes() {
        let cli = Cli::try_parse_from(["schedula", "cidades", "rm", "4", "-y"]).unwrap();
        match cli.command {
            Commands::Cidades { action } => assert_eq!(
                action,
                CrudAction::Delete {
                    key: "4".into(),
                    yes: true
                }
            ),
            _ => panic!("expected cidades command"),
        }
    }

    #[test]
    fn test_chamado_action_maps_to_crud() {
        assert_eq!(
            CrudAction::from(ChamadoAction::Edit { id: 7 }),
            CrudAction::Edit { key: "7".into() }
        );
    }
}
