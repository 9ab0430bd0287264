//! Move errors for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Reason a move was rejected.
///
/// Checked in declaration order: a finished game reports `GameOver` no matter
/// where the move lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveError {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The row, column or index is outside the board.
    #[display("Row/Col out of bounds")]
    OutOfRange,

    /// The target cell already holds a mark.
    #[display("Cell already occupied")]
    CellOccupied,

    /// The caller named a player whose turn it is not.
    #[display("Not your turn")]
    WrongTurn,
}

impl std::error::Error for MoveError {}
