//! Move validation and application for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use super::rules;
use super::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tic-tac-toe game engine: one round from empty board to terminal status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    current_player: Player,
    status: GameStatus,
    move_count: usize,
}

impl Game {
    /// Creates a new game with an empty board and X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::FIRST,
            status: GameStatus::InProgress,
            move_count: 0,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// Once the game is over this is the player who made the last move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the number of marks placed.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Places the current player's mark at board `index` (0-8).
    ///
    /// When `player` is given it must match the side to move.
    ///
    /// # Errors
    ///
    /// Returns the first failing check among [`MoveError::GameOver`],
    /// [`MoveError::OutOfRange`], [`MoveError::CellOccupied`] and
    /// [`MoveError::WrongTurn`]. The game is unchanged on error.
    #[instrument(skip(self), fields(current = ?self.current_player, status = ?self.status))]
    pub fn apply_move(&mut self, index: usize, player: Option<Player>) -> Result<GameStatus, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let pos = Position::from_index(index).ok_or(MoveError::OutOfRange)?;

        if !self.board.is_empty(pos) {
            return Err(MoveError::CellOccupied);
        }

        if player.is_some_and(|p| p != self.current_player) {
            return Err(MoveError::WrongTurn);
        }

        let mark = self.current_player;
        self.board.set(pos, Square::Occupied(mark));
        self.move_count += 1;

        self.status = rules::evaluate(&self.board);
        if !self.is_over() {
            self.current_player = mark.opponent();
        }

        debug!(position = %pos, ?mark, status = ?self.status, "Move applied");
        Ok(self.status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
