//! REST API over the session manager.

use crate::config::AppConfig;
use crate::error::GameError;
use crate::games::tictactoe::Player;
use crate::session::{GameView, SessionId, SessionManager};
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{HeaderValue, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, instrument, warn};

/// Body of `POST /api/games/{id}/move`.
///
/// Coordinates are signed so that negative values are reported as an
/// out-of-range move rather than a malformed request.
#[derive(Debug, Clone, Serialize, Deserialize, new)]
pub struct MoveRequest {
    /// Zero-based row (0-2).
    pub row: i64,
    /// Zero-based column (0-2).
    pub col: i64,
    /// Optional mark of the caller; rejected if it is not their turn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<Player>,
}

/// Envelope for every API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
    /// Session snapshot on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<GameView>,
}

impl ApiResponse {
    /// Successful response carrying a snapshot.
    pub fn ok(game: GameView) -> Self {
        Self {
            success: true,
            message: "OK".to_string(),
            game: Some(game),
        }
    }

    /// Failed response carrying a message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            game: None,
        }
    }
}

/// Adapter from [`GameError`] to an HTTP response.
#[derive(Debug)]
pub struct ApiError(GameError);

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            GameError::NotFound(_) => StatusCode::NOT_FOUND,
            GameError::InvalidMove(_) => StatusCode::BAD_REQUEST,
        };
        (status, Json(ApiResponse::fail(self.0.to_string()))).into_response()
    }
}

/// Parses a path id; anything that is not a known id format is simply not found.
fn parse_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse().map_err(|_| {
        warn!(id = raw, "Malformed session id");
        (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::fail(format!("Game not found: {}", raw))),
        )
            .into_response()
    })
}

/// Converts a wire coordinate; negatives become a value the board rejects as out of range.
fn coordinate(value: i64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[instrument(skip(sessions))]
async fn create_game(State(sessions): State<SessionManager>) -> Json<ApiResponse> {
    Json(ApiResponse::ok(sessions.create()))
}

#[instrument(skip(sessions))]
async fn get_game(State(sessions): State<SessionManager>, Path(id): Path<String>) -> Response {
    respond(&id, |id| sessions.get(id))
}

#[instrument(skip(sessions))]
async fn make_move(
    State(sessions): State<SessionManager>,
    Path(id): Path<String>,
    Json(req): Json<MoveRequest>,
) -> Response {
    respond(&id, |id| {
        sessions.play(id, coordinate(req.row), coordinate(req.col), req.player)
    })
}

#[instrument(skip(sessions))]
async fn cpu_move(State(sessions): State<SessionManager>, Path(id): Path<String>) -> Response {
    respond(&id, |id| sessions.cpu_move(id))
}

#[instrument(skip(sessions))]
async fn reset_game(State(sessions): State<SessionManager>, Path(id): Path<String>) -> Response {
    respond(&id, |id| sessions.reset(id))
}

#[instrument(skip(sessions))]
async fn reset_scores(State(sessions): State<SessionManager>, Path(id): Path<String>) -> Response {
    respond(&id, |id| sessions.reset_scores(id))
}

async fn health() -> &'static str {
    "ok"
}

fn respond(raw_id: &str, op: impl FnOnce(SessionId) -> Result<GameView, GameError>) -> Response {
    let id = match parse_id(raw_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    match op(id) {
        Ok(view) => Json(ApiResponse::ok(view)).into_response(),
        Err(err) => {
            warn!(session_id = %id, error = %err, "Request rejected");
            ApiError::from(err).into_response()
        }
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

/// Builds the application router.
pub fn router(sessions: SessionManager, config: &AppConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/games", post(create_game))
        .route("/api/games/{id}", get(get_game))
        .route("/api/games/{id}/move", post(make_move))
        .route("/api/games/{id}/cpu-move", post(cpu_move))
        .route("/api/games/{id}/reset", post(reset_game))
        .route("/api/games/{id}/reset-scores", post(reset_scores))
        .layer(
            ServiceBuilder::new()
                .map_request(|req: Request<Body>| {
                    info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
                    req
                })
                .layer(cors_layer(config.allowed_origins())),
        )
        .with_state(sessions)
}

/// Serves the API until the process is interrupted.
#[instrument(skip_all, fields(host = %config.host(), port = *config.port()))]
pub async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let sessions = match config.cpu_seed() {
        Some(seed) => SessionManager::with_seed(*seed),
        None => SessionManager::new(),
    };
    let app = router(sessions, &config);

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!("Server ready at http://{}:{}/", config.host(), config.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
