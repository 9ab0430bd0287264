//! Typed HTTP client for the REST API.

use crate::games::tictactoe::Player;
use crate::server::{ApiResponse, MoveRequest};
use crate::session::{GameView, SessionId};
use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

/// HTTP game client.
#[derive(Debug, Clone)]
pub struct RestGameClient {
    base_url: String,
    client: reqwest::Client,
}

impl RestGameClient {
    /// Creates a client for the server at `base_url` (e.g. `http://localhost:3000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Returns the server base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Creates a new game session.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn create(&self) -> Result<GameView> {
        info!("Creating game");
        self.send(self.client.post(self.url("/api/games"))).await
    }

    /// Gets the current game state.
    #[instrument(skip(self))]
    pub async fn get(&self, id: SessionId) -> Result<GameView> {
        self.send(self.client.get(self.url(&format!("/api/games/{}", id))))
            .await
    }

    /// Plays at (`row`, `col`), optionally asserting whose turn it is.
    #[instrument(skip(self))]
    pub async fn play(
        &self,
        id: SessionId,
        row: usize,
        col: usize,
        player: Option<Player>,
    ) -> Result<GameView> {
        let body = MoveRequest::new(
            i64::try_from(row).context("row too large")?,
            i64::try_from(col).context("col too large")?,
            player,
        );
        self.send(
            self.client
                .post(self.url(&format!("/api/games/{}/move", id)))
                .json(&body),
        )
        .await
    }

    /// Asks the server's CPU to play the side to move.
    #[instrument(skip(self))]
    pub async fn cpu_move(&self, id: SessionId) -> Result<GameView> {
        self.send(self.client.post(self.url(&format!("/api/games/{}/cpu-move", id))))
            .await
    }

    /// Starts a new round.
    #[instrument(skip(self))]
    pub async fn reset(&self, id: SessionId) -> Result<GameView> {
        self.send(self.client.post(self.url(&format!("/api/games/{}/reset", id))))
            .await
    }

    /// Clears the session's scoreboard.
    #[instrument(skip(self))]
    pub async fn reset_scores(&self, id: SessionId) -> Result<GameView> {
        self.send(self.client.post(self.url(&format!("/api/games/{}/reset-scores", id))))
            .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a request and unwraps the response envelope.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<GameView> {
        let response = request.send().await.context("request to game server failed")?;
        let status = response.status();
        let body = response.text().await?;
        debug!(status = %status, body = %body, "Got response");

        let envelope: ApiResponse = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(_) => anyhow::bail!("HTTP {}", status),
        };

        if !status.is_success() || !envelope.success {
            anyhow::bail!("{}", envelope.message);
        }

        envelope
            .game
            .context("response carried no game state")
    }
}
