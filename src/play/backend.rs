//! Where a console match sends its operations.

use crate::client::RestGameClient;
use crate::games::tictactoe::Player;
use crate::session::{GameView, SessionId, SessionManager};
use anyhow::Result;

/// The six session operations, in-process or over HTTP.
#[async_trait::async_trait]
pub trait GameBackend: Send + Sync {
    /// Creates a new session.
    async fn create(&self) -> Result<GameView>;

    /// Fetches a session snapshot.
    async fn get(&self, id: SessionId) -> Result<GameView>;

    /// Plays the side to move at (`row`, `col`).
    async fn play(&self, id: SessionId, row: usize, col: usize, player: Option<Player>) -> Result<GameView>;

    /// Lets the CPU play the side to move.
    async fn cpu_move(&self, id: SessionId) -> Result<GameView>;

    /// Starts a new round.
    async fn reset(&self, id: SessionId) -> Result<GameView>;

    /// Clears the scoreboard.
    async fn reset_scores(&self, id: SessionId) -> Result<GameView>;
}

/// Backend that drives a [`SessionManager`] in the same process.
#[derive(Debug, Clone, Default)]
pub struct LocalBackend {
    sessions: SessionManager,
}

impl LocalBackend {
    /// Wraps an existing session manager.
    pub fn new(sessions: SessionManager) -> Self {
        Self { sessions }
    }
}

#[async_trait::async_trait]
impl GameBackend for LocalBackend {
    async fn create(&self) -> Result<GameView> {
        Ok(self.sessions.create())
    }

    async fn get(&self, id: SessionId) -> Result<GameView> {
        Ok(self.sessions.get(id)?)
    }

    async fn play(&self, id: SessionId, row: usize, col: usize, player: Option<Player>) -> Result<GameView> {
        Ok(self.sessions.play(id, row, col, player)?)
    }

    async fn cpu_move(&self, id: SessionId) -> Result<GameView> {
        Ok(self.sessions.cpu_move(id)?)
    }

    async fn reset(&self, id: SessionId) -> Result<GameView> {
        Ok(self.sessions.reset(id)?)
    }

    async fn reset_scores(&self, id: SessionId) -> Result<GameView> {
        Ok(self.sessions.reset_scores(id)?)
    }
}

#[async_trait::async_trait]
impl GameBackend for RestGameClient {
    async fn create(&self) -> Result<GameView> {
        RestGameClient::create(self).await
    }

    async fn get(&self, id: SessionId) -> Result<GameView> {
        RestGameClient::get(self, id).await
    }

    async fn play(&self, id: SessionId, row: usize, col: usize, player: Option<Player>) -> Result<GameView> {
        RestGameClient::play(self, id, row, col, player).await
    }

    async fn cpu_move(&self, id: SessionId) -> Result<GameView> {
        RestGameClient::cpu_move(self, id).await
    }

    async fn reset(&self, id: SessionId) -> Result<GameView> {
        RestGameClient::reset(self, id).await
    }

    async fn reset_scores(&self, id: SessionId) -> Result<GameView> {
        RestGameClient::reset_scores(self, id).await
    }
}
