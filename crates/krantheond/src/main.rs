//! Krantheon Daemon - deterministic command API
//!
//! Routes free-text commands to canned analytical results and serves the
//! read-only dashboard fixtures.

use anyhow::Result;
use clap::{Parser, Subcommand};
use krantheon_shared::{route, CommandRequest};
use krantheond::config::{Config, CONFIG_PATH};
use krantheond::server::{self, AppState};
use krantheond::{init_logging, pipeline};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "krantheond")]
#[command(about = "Krantheon OS - deterministic command router", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (default: /etc/krantheon/config.toml, then /var/lib/krantheon/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API (default)
    Serve {
        /// Listen address, overrides server.bind_addr
        #[arg(long)]
        bind: Option<String>,
    },

    /// Run one command offline and print the response envelope
    Ask {
        /// Command text, e.g. "investigate 8.8.8.8"
        #[arg(required = true)]
        text: Vec<String>,

        /// Session id echoed in the envelope
        #[arg(long)]
        session: Option<String>,
    },

    /// Show how text is routed without running it
    Route {
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Write a default config file
    InitConfig {
        /// Destination path
        #[arg(default_value = CONFIG_PATH)]
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load(),
    };
    init_logging(&config.logging.level);

    match cli.command.unwrap_or(Commands::Serve { bind: None }) {
        Commands::Serve { bind } => {
            let mut config = config;
            if let Some(bind) = bind {
                config.server.bind_addr = bind;
            }
            info!("Krantheon Daemon v{} starting", env!("CARGO_PKG_VERSION"));
            server::run(AppState::new(config)).await
        }
        Commands::Ask { text, session } => {
            let session = session.unwrap_or_else(|| config.session.default_id.clone());
            let request = CommandRequest::new(text.join(" ")).with_session(session);
            let response = pipeline::execute(&request)?;
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Commands::Route { text } => {
            let routed = route(&text.join(" "));
            println!("{}", serde_json::to_string_pretty(&routed)?);
            Ok(())
        }
        Commands::InitConfig { path } => Config::save_default(&path),
    }
}
