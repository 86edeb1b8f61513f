use clap::Parser;
use schedula::{auth, cli, config, error, gateway, notifier, pages};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use notifier::TerminalNotifier;
use pages::{
    run_crud, CategoryScreen, ChamadoScreen, CityScreen, Context, ProblemTypeScreen, UserScreen,
    WorkstationScreen,
};
use schedula_common::filters::WorkstationFilters;
use schedula_common::select::SelectOption;
use schedula_common::types::{Category, Chamado, City, ProblemType, User, Workstation};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "schedula=debug,schedula_common=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut config = Config::load()?;

    match cli.command {
        Commands::Login { username } => {
            let gateway = gateway::connect(&config)?;
            auth::login_interactive(&mut config, &gateway, username).await?;
        }

        Commands::Logout => {
            config.session = None;
            config.save()?;
            println!("✔ Sessão encerrada");
        }

        Commands::Config { api_url, show } => {
            if let Some(url) = api_url {
                config.api_url = url;
                config.save()?;
                println!("✔ URL da API definida");
            }

            if show {
                println!("Configuração:");
                println!("  API: {}", config.api_url());
                println!("  Timeout: {}s", config.timeout_seconds);
                println!(
                    "  Sessão: {}",
                    config.session.as_ref().map_or("nenhuma", |s| s.display_name())
                );
            }
        }

        Commands::Menu => {
            println!("{}", auth::sidebar(config.session.as_ref()));
        }

        command => {
            let ctx = Context {
                gateway: gateway::connect(&config)?,
                session: config.session()?.clone(),
                notifier: TerminalNotifier,
            };
            tracing::debug!(user = %ctx.session.user.username, "session loaded");

            match command {
                Commands::Chamados { action } => {
                    let screen = ChamadoScreen::load(&ctx).await;
                    run_crud::<Chamado, _, _, _>(&ctx, &screen, action.into()).await?;
                }
                Commands::Workstation { regional, nome, action } => {
                    let filters = WorkstationFilters {
                        regional: regional.map(|id| SelectOption::new(id.to_string(), id)),
                        nome: nome.unwrap_or_default(),
                    };
                    let screen = WorkstationScreen::load(&ctx, filters).await;
                    run_crud::<Workstation, _, _, _>(&ctx, &screen, action).await?;
                }
                Commands::Cidades { action } => {
                    run_crud::<City, _, _, _>(&ctx, &CityScreen, action).await?;
                }
                Commands::Problemas { action } => {
                    run_crud::<ProblemType, _, _, _>(&ctx, &ProblemTypeScreen, action).await?;
                }
                Commands::Categorias { action } => {
                    run_crud::<Category, _, _, _>(&ctx, &CategoryScreen, action).await?;
                }
                Commands::Usuarios { action } => {
                    run_crud::<User, _, _, _>(&ctx, &UserScreen, action).await?;
                }
                Commands::Login { .. } | Commands::Logout | Commands::Config { .. } | Commands::Menu => {}
            }
        }
    }

    Ok(())
}
