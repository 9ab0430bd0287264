//! Tic-tac-toe engine: board, rules, move application and the CPU heuristic.

mod action;
mod cpu;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::MoveError;
pub use cpu::{Rule, choose_move, choose_move_with_rule};
pub use game::Game;
pub use position::Position;
pub use rules::{LINES, Line, evaluate};
pub use types::{Board, GameStatus, Player, Square};
