//! Session-level error types.

use crate::games::tictactoe::MoveError;
use crate::session::SessionId;
use derive_more::{Display, Error};

/// Error returned by [`SessionManager`](crate::SessionManager) operations.
///
/// Both kinds are recoverable and leave every session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// No session with this id exists.
    #[display("Game not found: {_0}")]
    NotFound(#[error(not(source))] SessionId),

    /// The move was rejected by the rules.
    #[display("{_0}")]
    InvalidMove(MoveError),
}

impl From<MoveError> for GameError {
    fn from(err: MoveError) -> Self {
        Self::InvalidMove(err)
    }
}

impl GameError {
    /// Returns the move rejection kind, if this is one.
    pub fn move_error(&self) -> Option<MoveError> {
        match self {
            GameError::InvalidMove(kind) => Some(*kind),
            GameError::NotFound(_) => None,
        }
    }
}
