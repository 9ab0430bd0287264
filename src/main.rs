//! Noughts - Unified CLI
//!
//! Tic-tac-toe server and console client.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use noughts::{AppConfig, DEFAULT_CONFIG_FILE, GameMode, HumanMark, Seating};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { host, port, config } => run_server(host, port, config).await,
        Command::Play {
            server_url,
            mode,
            mark,
            seed,
            config,
        } => run_play(server_url, mode, mark, seed, config).await,
    }
}

/// Installs a stderr subscriber; `RUST_LOG` wins over `default_filter`.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}

/// An explicit path must exist; the default file is optional.
fn load_config(path: Option<PathBuf>) -> Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::load_or_default(DEFAULT_CONFIG_FILE)?,
    };
    Ok(config)
}

/// Run the HTTP game server
#[instrument]
async fn run_server(host: Option<String>, port: Option<u16>, config: Option<PathBuf>) -> Result<()> {
    init_tracing("info");
    info!("Starting noughts HTTP server");

    let config = load_config(config)?.with_bind(host, port);
    noughts::serve(config).await
}

/// Run the console client
#[instrument]
async fn run_play(
    server_url: Option<String>,
    mode: GameMode,
    mark: HumanMark,
    seed: Option<u64>,
    config: Option<PathBuf>,
) -> Result<()> {
    init_tracing("warn");

    let config = load_config(config)?.with_cpu_seed(seed);
    let seating = Seating::new(mode, mark.into());
    noughts::run_console(&config, server_url, seating).await
}
