//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts::{GameMode, HumanMark};
use std::path::PathBuf;

/// Noughts - tic-tac-toe server and console client
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe with a heuristic CPU opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Host to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to the TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Play in the terminal
    Play {
        /// Game server URL. If not provided, plays in-process.
        #[arg(long)]
        server_url: Option<String>,

        /// Opponent
        #[arg(long, value_enum, default_value_t = GameMode::Cpu)]
        mode: GameMode,

        /// Mark the human plays against the CPU
        #[arg(long, value_enum, default_value_t = HumanMark::X)]
        mark: HumanMark,

        /// Seed for the CPU's random tie-breaks (in-process only)
        #[arg(long)]
        seed: Option<u64>,

        /// Path to the TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
