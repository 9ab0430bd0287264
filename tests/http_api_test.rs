//! Tests for the REST API and its typed client.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use noughts::{AppConfig, Player, RestGameClient, SessionManager, router};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    router(SessionManager::with_seed(5), &AppConfig::default())
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

async fn create(app: &Router) -> String {
    let (status, body) = call(app, "POST", "/api/games", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    body["game"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_create_returns_fresh_game() {
    let app = app();
    let (status, body) = call(&app, "POST", "/api/games", None).await;

    assert_eq!(status, StatusCode::OK);
    let game = &body["game"];
    assert_eq!(game["currentPlayer"], "X");
    assert_eq!(game["winner"], Value::Null);
    assert_eq!(game["draw"], false);
    assert_eq!(game["winningLine"], Value::Null);
    assert!(game["board"].as_array().unwrap().iter().all(Value::is_null));
}

#[tokio::test]
async fn test_win_over_http() {
    let app = app();
    let id = create(&app).await;
    let uri = format!("/api/games/{}/move", id);

    let mut last = Value::Null;
    for (row, col) in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)] {
        let (status, body) = call(&app, "POST", &uri, Some(json!({ "row": row, "col": col }))).await;
        assert_eq!(status, StatusCode::OK);
        last = body;
    }

    assert_eq!(last["game"]["winner"], "X");
    assert_eq!(last["game"]["winningLine"], json!([0, 3, 6]));
    assert_eq!(last["game"]["scores"]["x"], 1);
}

#[tokio::test]
async fn test_invalid_moves_are_bad_request() {
    let app = app();
    let id = create(&app).await;
    let uri = format!("/api/games/{}/move", id);
    call(&app, "POST", &uri, Some(json!({ "row": 1, "col": 1 }))).await;

    let (status, body) = call(&app, "POST", &uri, Some(json!({ "row": 1, "col": 1 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Cell already occupied");

    let (status, body) = call(&app, "POST", &uri, Some(json!({ "row": -1, "col": 0 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Row/Col out of bounds");

    let (status, body) = call(
        &app,
        "POST",
        &uri,
        Some(json!({ "row": 0, "col": 0, "player": "X" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Not your turn");
}

#[tokio::test]
async fn test_unknown_and_malformed_ids_not_found() {
    let app = app();
    let (status, body) = call(
        &app,
        "GET",
        "/api/games/00000000-0000-0000-0000-000000000000",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);

    let (status, _) = call(&app, "POST", "/api/games/nope/cpu-move", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cpu_move_reset_and_scores() {
    let app = app();
    let id = create(&app).await;

    let (status, body) = call(&app, "POST", &format!("/api/games/{}/cpu-move", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["game"]["board"][4], "X");
    assert_eq!(body["game"]["currentPlayer"], "O");

    let (_, body) = call(&app, "POST", &format!("/api/games/{}/reset", id), None).await;
    assert_eq!(body["game"]["id"], id.as_str());
    assert_eq!(body["game"]["moveCount"], 0);

    let (status, body) = call(&app, "POST", &format!("/api/games/{}/reset-scores", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["game"]["scores"], json!({ "x": 0, "o": 0, "draws": 0 }));
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn test_rest_client_round_trip() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app()).await.unwrap();
    });

    let client = RestGameClient::new(format!("http://{}/", addr));
    assert_eq!(client.base_url(), format!("http://{}", addr));

    let view = client.create().await.unwrap();
    let view = client.play(view.id, 2, 2, Some(Player::X)).await.unwrap();
    assert_eq!(view.board[8], Some(Player::X));

    let err = client.play(view.id, 2, 2, None).await.unwrap_err();
    assert_eq!(err.to_string(), "Cell already occupied");

    let view = client.cpu_move(view.id).await.unwrap();
    assert_eq!(view.board[4], Some(Player::O));
    assert_eq!(client.get(view.id).await.unwrap(), view);
}
