//! Game session management.
//!
//! A [`SessionManager`] owns every live [`GameSession`]. Mutations on one
//! session are serialized by that session's own lock; the id map is only
//! locked long enough to find or insert an entry.

use crate::error::GameError;
use crate::games::tictactoe::{Game, GameStatus, MoveError, Player, Position, choose_move};
use derive_getters::Getters;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Unique identifier for a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::str::FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Wins and draws tallied across the rounds of one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Rounds won by X.
    x: u32,
    /// Rounds won by O.
    o: u32,
    /// Drawn rounds.
    draws: u32,
}

impl Scoreboard {
    /// Counts a finished round. In-progress statuses are ignored.
    pub fn record(&mut self, status: &GameStatus) {
        match status {
            GameStatus::Won { winner: Player::X, .. } => self.x += 1,
            GameStatus::Won { winner: Player::O, .. } => self.o += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    /// Zeroes every tally.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Snapshot of a session, as handed to adapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    /// Session id.
    pub id: SessionId,
    /// Marks in row-major order.
    pub board: [Option<Player>; 9],
    /// Player to move (or who moved last, once the game is over).
    pub current_player: Player,
    /// Winner, if the game is won.
    pub winner: Option<Player>,
    /// Whether the game ended in a draw.
    pub draw: bool,
    /// Indices of the winning line, if the game is won.
    pub winning_line: Option<[usize; 3]>,
    /// Marks placed this round.
    pub move_count: usize,
    /// Tally across rounds.
    pub scores: Scoreboard,
}

impl GameView {
    /// Returns true once the round is won or drawn.
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.draw
    }
}

/// A game session: one id, the current round and the running score.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Session ID.
    pub id: SessionId,
    /// The current round.
    pub game: Game,
    /// Results of finished rounds.
    pub scores: Scoreboard,
}

impl GameSession {
    /// Creates a new game session.
    #[instrument]
    pub fn new(id: SessionId) -> Self {
        info!(session_id = %id, "Creating new game session");
        Self {
            id,
            game: Game::new(),
            scores: Scoreboard::default(),
        }
    }

    /// Returns a snapshot of this session.
    pub fn view(&self) -> GameView {
        let status = self.game.status();
        GameView {
            id: self.id,
            board: self.game.board().marks(),
            current_player: self.game.current_player(),
            winner: status.winner(),
            draw: *status == GameStatus::Draw,
            winning_line: status.line().map(|line| line.indices()),
            move_count: self.game.move_count(),
            scores: self.scores,
        }
    }

    /// Places a mark and records the result if the round ends.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn make_move(&mut self, position: Position, player: Option<Player>) -> Result<(), MoveError> {
        let status = self.game.apply_move(position.to_index(), player).map_err(|e| {
            warn!(position = %position, error = %e, "Invalid move");
            e
        })?;

        if status.is_over() {
            self.scores.record(&status);
            info!(?status, scores = ?self.scores, "Round finished");
        }
        Ok(())
    }

    /// Starts a new round, keeping the id and the score.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn reset(&mut self) {
        info!("Resetting round");
        self.game = Game::new();
    }
}

/// Manages all game sessions.
///
/// Cloning shares the same sessions and random source.
#[derive(Debug, Clone)]
pub struct SessionManager {
    sessions: Arc<RwLock<HashMap<SessionId, Arc<Mutex<GameSession>>>>>,
    rng: Arc<Mutex<StdRng>>,
}

impl SessionManager {
    /// Creates a session manager with an entropy-seeded CPU.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session manager");
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a session manager whose CPU choices replay for a given seed.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        info!(seed, "Creating seeded session manager");
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Creates a new game session.
    #[instrument(skip(self))]
    pub fn create(&self) -> GameView {
        let session = GameSession::new(SessionId::new());
        let view = session.view();
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(session.id, Arc::new(Mutex::new(session)));

        info!(session_id = %view.id, "Created new session");
        view
    }

    /// Gets a session snapshot by ID.
    #[instrument(skip(self))]
    pub fn get(&self, id: SessionId) -> Result<GameView, GameError> {
        self.with_session(id, |session| Ok(session.view()))
    }

    /// Plays the side to move at (`row`, `col`).
    ///
    /// When `player` is given it must be the side to move.
    #[instrument(skip(self))]
    pub fn play(
        &self,
        id: SessionId,
        row: usize,
        col: usize,
        player: Option<Player>,
    ) -> Result<GameView, GameError> {
        self.with_session(id, |session| {
            if session.game.is_over() {
                return Err(MoveError::GameOver.into());
            }
            let position = Position::from_row_col(row, col)?;
            session.make_move(position, player)?;
            Ok(session.view())
        })
    }

    /// Lets the CPU play the side to move.
    #[instrument(skip(self))]
    pub fn cpu_move(&self, id: SessionId) -> Result<GameView, GameError> {
        self.with_session(id, |session| {
            if session.game.is_over() {
                return Err(MoveError::GameOver.into());
            }
            let cpu = session.game.current_player();
            let position = {
                let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
                choose_move(session.game.board(), cpu, cpu.opponent(), &mut *rng)
            }
            .ok_or(MoveError::GameOver)?;

            debug!(?cpu, position = %position, "CPU moving");
            session.make_move(position, Some(cpu))?;
            Ok(session.view())
        })
    }

    /// Starts a new round in an existing session.
    #[instrument(skip(self))]
    pub fn reset(&self, id: SessionId) -> Result<GameView, GameError> {
        self.with_session(id, |session| {
            session.reset();
            Ok(session.view())
        })
    }

    /// Clears the session's scoreboard; the board is left as is.
    #[instrument(skip(self))]
    pub fn reset_scores(&self, id: SessionId) -> Result<GameView, GameError> {
        self.with_session(id, |session| {
            info!("Clearing scores");
            session.scores.clear();
            Ok(session.view())
        })
    }

    /// Lists all active session IDs.
    #[instrument(skip(self))]
    pub fn list(&self) -> Vec<SessionId> {
        let ids: Vec<_> = self.read_sessions().keys().copied().collect();
        debug!(count = ids.len(), "Listed sessions");
        ids
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.read_sessions().len()
    }

    /// Returns true when no session exists.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_sessions(
        &self,
    ) -> std::sync::RwLockReadGuard<'_, HashMap<SessionId, Arc<Mutex<GameSession>>>> {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` while holding the session's lock.
    fn with_session<T>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut GameSession) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        let session = self.read_sessions().get(&id).cloned().ok_or_else(|| {
            debug!(session_id = %id, "Session not found");
            GameError::NotFound(id)
        })?;

        let mut guard: MutexGuard<'_, GameSession> =
            session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
