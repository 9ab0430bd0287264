//! Console client: play in-process or against a remote server.

mod backend;
mod input;
mod mode;
mod orchestrator;

pub use backend::{GameBackend, LocalBackend};
pub use input::{Command, HELP, parse_command};
pub use mode::{GameMode, HumanMark, Seating};
pub use orchestrator::{Match, status_line};

use crate::client::RestGameClient;
use crate::config::AppConfig;
use crate::session::SessionManager;
use anyhow::Result;
use std::time::Duration;
use tokio::io::BufReader;
use tracing::{info, instrument};

/// Runs a console match on stdin/stdout.
///
/// With `server_url` the match is played through the REST API, otherwise
/// against an in-process session manager.
#[instrument(skip(config))]
pub async fn run_console(config: &AppConfig, server_url: Option<String>, seating: Seating) -> Result<()> {
    let delay = Duration::from_millis(*config.cpu_delay_ms());
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    let view = match server_url {
        Some(url) => {
            info!(url = %url, "Playing against remote server");
            Match::new(RestGameClient::new(url), seating, delay)
                .run(stdin, &mut stdout)
                .await?
        }
        None => {
            let sessions = match config.cpu_seed() {
                Some(seed) => SessionManager::with_seed(*seed),
                None => SessionManager::new(),
            };
            Match::new(LocalBackend::new(sessions), seating, delay)
                .run(stdin, &mut stdout)
                .await?
        }
    };

    println!(
        "Final score  X: {}  O: {}  Draws: {}",
        view.scores.x(),
        view.scores.o(),
        view.scores.draws()
    );
    Ok(())
}
