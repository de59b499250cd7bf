/// Roster Server - read-only user directory REST service
use clap::{Parser, Subcommand};
use roster_core::{DirectoryQueryService, DirectoryStore, UserDirectory};
use roster_server::{
    config::ServerConfig,
    routes::{create_router, ENDPOINTS},
    state::AppState,
    version::VersionInfo,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "Roster user directory demo server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "ROSTER_CONFIG")]
        config: Option<PathBuf>,
    },
    /// List all users in the directory
    ListUsers,
    /// Print the resolved version information as JSON
    Version {
        /// Configuration file path
        #[arg(short, long, env = "ROSTER_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::ListUsers => {
            list_users();
        }
        Commands::Version { config } => {
            print_version(config)?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load_from(config_path.as_deref())?;
    config.validate()?;

    let version = VersionInfo::resolve(&config);
    let addr = config.bind_addr()?;

    tracing::info!("Starting Roster Server");
    tracing::info!("Version: {}", version.version);
    tracing::info!("Environment: {}", version.environment);
    tracing::info!("Commit: {} ({})", version.git_commit, version.git_branch);
    for (route, description) in ENDPOINTS {
        tracing::info!("  {:<28} {}", route, description);
    }

    let app_state = AppState::seeded(version);
    tracing::info!("Directory loaded with {} users", app_state.directory.list_all().len());

    let app = create_router(app_state);

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn list_users() {
    let directory = DirectoryQueryService::new(DirectoryStore::seeded());

    println!("Users:");
    for user in directory.list_all() {
        println!(
            "  {} - {} <{}> [{}, level {}]",
            user.id, user.name, user.email, user.role, user.level
        );
    }
}

fn print_version(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = ServerConfig::load_from(config_path.as_deref())?;
    let version = VersionInfo::resolve(&config);

    println!("{}", serde_json::to_string_pretty(&version)?);

    Ok(())
}
