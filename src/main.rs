use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use listkeeper::api::{self, AppState};
use listkeeper::config::Config;
use listkeeper::session::SessionRegistry;

#[derive(Parser)]
#[command(name = "listkeeper")]
#[command(about = "Session-scoped to-do lists over HTTP")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the listkeeper server
    Serve {
        /// Host address to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port for HTTP API
        #[arg(short, long)]
        port: Option<u16>,

        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the effective configuration as JSON
    Config {
        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "listkeeper=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// File, then environment. CLI flags are applied by the caller.
fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    let mut config = match path {
        Some(path) => Config::from_file(&path)?,
        None => Config::default(),
    };
    config.apply_env();
    Ok(config)
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let sessions =
        SessionRegistry::new(config.session_ttl()).with_max_sessions(config.max_sessions);
    let app = api::create_router(AppState::new(sessions, config.store));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        max_sessions = config.max_sessions,
        toggle_mode = config.store.toggle_mode.as_str(),
        rename_scope = config.store.rename_scope.as_str(),
        "listkeeper server listening on http://{}",
        addr
    );

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve { host, port, config }) => {
            let mut config = load_config(config)?;
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            serve(config).await?;
        }
        Some(Commands::Config { config }) => {
            let config = load_config(config)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        None => {
            serve(load_config(None)?).await?;
        }
    }

    Ok(())
}
