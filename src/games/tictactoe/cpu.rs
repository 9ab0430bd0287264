//! Rule-priority CPU opponent.
//!
//! The policy is win, block, center, corner, side, anything. It has no
//! look-ahead, so a fork beats it.

use super::position::Position;
use super::rules::wins_with;
use super::types::{Board, Player};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Which rule produced the CPU's choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rule {
    /// Completes a line for the CPU.
    #[display("win")]
    Win,
    /// Denies the opponent a completed line.
    #[display("block")]
    Block,
    /// Takes the center.
    #[display("center")]
    Center,
    /// Takes a free corner.
    #[display("corner")]
    Corner,
    /// Takes a free side.
    #[display("side")]
    Side,
    /// Takes any free cell.
    #[display("fallback")]
    Fallback,
}

/// Chooses a move for `cpu` against `human`, or `None` if the board is full.
///
/// Random ties (corners, sides, fallback) draw from `rng`.
#[instrument(skip(board, rng))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    cpu: Player,
    human: Player,
    rng: &mut R,
) -> Option<Position> {
    choose_move_with_rule(board, cpu, human, rng).map(|(pos, _)| pos)
}

/// Like [`choose_move`], also reporting the rule that fired.
pub fn choose_move_with_rule<R: Rng + ?Sized>(
    board: &Board,
    cpu: Player,
    human: Player,
    rng: &mut R,
) -> Option<(Position, Rule)> {
    let empty = board.empty_positions();
    if empty.is_empty() {
        return None;
    }

    let choice = if let Some(pos) = empty.iter().copied().find(|&p| wins_with(board, p, cpu)) {
        (pos, Rule::Win)
    } else if let Some(pos) = empty.iter().copied().find(|&p| wins_with(board, p, human)) {
        (pos, Rule::Block)
    } else if board.is_empty(Position::Center) {
        (Position::Center, Rule::Center)
    } else if let Some(pos) = pick_free(board, &Position::CORNERS, rng) {
        (pos, Rule::Corner)
    } else if let Some(pos) = pick_free(board, &Position::SIDES, rng) {
        (pos, Rule::Side)
    } else {
        // Center, corners and sides cover the board, so this only guards the invariant.
        (*empty.choose(rng)?, Rule::Fallback)
    };

    debug!(position = %choice.0, rule = %choice.1, "CPU chose move");
    Some(choice)
}

fn pick_free<R: Rng + ?Sized>(board: &Board, candidates: &[Position], rng: &mut R) -> Option<Position> {
    let free: Vec<Position> = candidates.iter().copied().filter(|&p| board.is_empty(p)).collect();
    free.choose(rng).copied()
}
