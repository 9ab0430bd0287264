//! Noughts - tic-tac-toe sessions with a heuristic CPU opponent
//!
//! # Architecture
//!
//! - **Games**: Board, win/draw evaluation, move validation and the CPU heuristic
//! - **Session**: Concurrent game sessions with a per-session scoreboard
//! - **Server**: REST API over the session manager
//! - **Client**: Typed HTTP client for that API
//! - **Play**: Console client, in-process or against a server
//!
//! # Example
//!
//! ```
//! use noughts::{Player, SessionManager};
//!
//! let sessions = SessionManager::with_seed(7);
//! let id = sessions.create().id;
//! let view = sessions.play(id, 1, 1, None).unwrap();
//! assert_eq!(view.board[4], Some(Player::X));
//! assert_eq!(view.current_player, Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod client;
mod config;
mod error;
mod games;
mod play;
mod server;
mod session;

// Crate-level exports - Game engine
pub use games::tictactoe::{
    Board, Game, GameStatus, LINES, Line, MoveError, Player, Position, Rule, Square,
    choose_move, choose_move_with_rule, evaluate,
};

// Crate-level exports - Rule helpers
pub use games::tictactoe::rules::{check_winner, is_draw, is_full, wins_with};

// Crate-level exports - Errors
pub use error::GameError;

// Crate-level exports - Session management
pub use session::{GameSession, GameView, Scoreboard, SessionId, SessionManager};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};

// Crate-level exports - HTTP server and client
pub use client::RestGameClient;
pub use server::{ApiError, ApiResponse, MoveRequest, router, serve};

// Crate-level exports - Console client
pub use play::{
    Command, GameBackend, GameMode, HELP, HumanMark, LocalBackend, Match, Seating,
    parse_command, run_console, status_line,
};
