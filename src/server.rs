//! HTTP serving boundary
//!
//! - `POST /api/game/ai-move`: `{board, aiColor, difficulty}` to `{move}`
//! - `POST /api/game/judge`: `{board, move}` to the game status after the move
//! - `GET /api/health`
//!
//! Engine calls run on the blocking pool under a timeout. When the timeout
//! fires the request is answered with the easy tier instead of failing.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::board::{Board, BoardRows, Pos, Stone};
use crate::config::Config;
use crate::engine::{Difficulty, Engine, MoveResult};
use crate::error::{EngineError, MoveError};
use crate::game::{Game, GameStatus};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    engine: Arc<Engine>,
    request_timeout: Duration,
}

impl AppState {
    pub fn new(engine: Engine, request_timeout: Duration) -> Self {
        Self {
            engine: Arc::new(engine),
            request_timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Engine::with_config(config.engine.clone()),
            Duration::from_millis(config.server.request_timeout_ms),
        )
    }
}

/// Errors surfaced to HTTP clients
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error("malformed request: {0}")]
    BadRequest(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(error = %self, "request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AiMoveRequest {
    board: Option<Value>,
    ai_color: Option<String>,
    difficulty: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AiMoveResponse {
    #[serde(rename = "move")]
    pub mv: Option<Pos>,
}

#[derive(Debug, Deserialize)]
struct JudgeRequest {
    board: Option<Value>,
    #[serde(rename = "move")]
    mv: Option<JudgeMove>,
}

#[derive(Debug, Deserialize)]
struct JudgeMove {
    row: i32,
    col: i32,
    color: String,
}

/// Decode a wire board, reporting any shape or cell problem as `InvalidBoard`
fn parse_board(value: Option<Value>) -> Result<Board, EngineError> {
    let value = value.ok_or_else(|| EngineError::InvalidBoard("board is required".to_string()))?;
    let rows: BoardRows =
        serde_json::from_value(value).map_err(|e| EngineError::InvalidBoard(e.to_string()))?;
    Board::from_rows(&rows)
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn require<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str, EngineError> {
    value.ok_or_else(|| EngineError::InvalidParameter(format!("{name} is required")))
}

impl AiMoveRequest {
    fn parse(self) -> Result<(Board, Stone, Difficulty), EngineError> {
        let board = parse_board(self.board)?;
        let color = require(self.ai_color.as_deref(), "aiColor")?.parse::<Stone>()?;
        let difficulty = require(self.difficulty.as_deref(), "difficulty")?.parse::<Difficulty>()?;
        Ok((board, color, difficulty))
    }
}

/// Run the engine on the blocking pool, falling back to easy on timeout
pub async fn compute_move(
    state: &AppState,
    board: Board,
    color: Stone,
    difficulty: Difficulty,
) -> Result<MoveResult, ApiError> {
    let engine = Arc::clone(&state.engine);
    let task =
        tokio::task::spawn_blocking(move || engine.select_move_with_stats(&board, color, difficulty));

    match tokio::time::timeout(state.request_timeout, task).await {
        Ok(joined) => {
            let result = joined.map_err(|e| ApiError::Internal(e.to_string()))??;
            Ok(result)
        }
        Err(_) => {
            warn!(
                %difficulty,
                timeout_ms = millis(state.request_timeout),
                "engine timed out, falling back to easy"
            );
            Ok(state
                .engine
                .select_move_with_stats(&board, color, Difficulty::Easy)?)
        }
    }
}

async fn ai_move(
    State(state): State<AppState>,
    payload: Result<Json<AiMoveRequest>, JsonRejection>,
) -> Result<Json<AiMoveResponse>, ApiError> {
    let start = Instant::now();
    let Json(request) = payload?;
    let (board, color, difficulty) = request.parse()?;

    let result = compute_move(&state, board, color, difficulty).await?;

    info!(
        %difficulty,
        %color,
        best_move = ?result.best_move,
        search_type = ?result.search_type,
        nodes = result.nodes,
        elapsed_ms = millis(start.elapsed()),
        "ai move"
    );
    Ok(Json(AiMoveResponse {
        mv: result.best_move,
    }))
}

async fn judge(
    payload: Result<Json<JudgeRequest>, JsonRejection>,
) -> Result<Json<GameStatus>, ApiError> {
    let Json(request) = payload?;
    let board = parse_board(request.board)?;
    let mv = request
        .mv
        .ok_or_else(|| EngineError::InvalidParameter("move is required".to_string()))?;
    let color: Stone = mv.color.parse()?;

    let mut game = Game::from_board(board);
    let status = game.play(mv.row, mv.col, color)?;
    info!(row = mv.row, col = mv.col, %color, ?status, "move judged");
    Ok(Json(status))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// All routes
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/game/ai-move", post(ai_move))
        .route("/api/game/judge", post(judge))
        .route("/api/health", get(health))
        .with_state(state)
}

/// Bind and serve until Ctrl-C
pub async fn run(config: &Config) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.server.bind).await?;
    info!(addr = %listener.local_addr()?, "gomoku server listening");

    axum::serve(listener, router(AppState::from_config(config)))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    info!("shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState::new(Engine::new(), Duration::from_secs(5)))
    }

    fn empty_rows() -> Vec<Vec<Value>> {
        vec![vec![Value::Null; 15]; 15]
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_ai_move_opening() {
        let body = json!({ "board": empty_rows(), "aiColor": "black", "difficulty": "easy" });
        let (status, json) = post_json(app(), "/api/game/ai-move", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({ "move": { "row": 7, "col": 7 } }));
    }

    #[tokio::test]
    async fn test_ai_move_takes_win() {
        let mut rows = empty_rows();
        for c in 3..7 {
            rows[7][c] = json!("black");
        }
        rows[7][2] = json!("white");
        for difficulty in ["easy", "normal", "hard"] {
            let body = json!({ "board": rows, "aiColor": "black", "difficulty": difficulty });
            let (status, json) = post_json(app(), "/api/game/ai-move", body).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(json["move"], json!({ "row": 7, "col": 7 }), "{difficulty}");
        }
    }

    #[tokio::test]
    async fn test_ai_move_full_board_is_null() {
        let rows: Vec<Vec<Value>> = (0..15)
            .map(|r| {
                (0..15)
                    .map(|c| {
                        if ((c / 2) + r) % 2 == 0 {
                            json!("black")
                        } else {
                            json!("white")
                        }
                    })
                    .collect()
            })
            .collect();
        let body = json!({ "board": rows, "aiColor": "white", "difficulty": "medium" });
        let (status, json) = post_json(app(), "/api/game/ai-move", body).await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["move"].is_null());
    }

    #[tokio::test]
    async fn test_ai_move_missing_fields() {
        let (status, json) =
            post_json(app(), "/api/game/ai-move", json!({ "board": empty_rows() })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("aiColor"));

        let body = json!({ "aiColor": "black", "difficulty": "easy" });
        let (status, _) = post_json(app(), "/api/game/ai-move", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_ai_move_rejects_bad_values() {
        let body = json!({ "board": empty_rows(), "aiColor": "red", "difficulty": "easy" });
        let (status, _) = post_json(app(), "/api/game/ai-move", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let body = json!({ "board": empty_rows(), "aiColor": "black", "difficulty": "expert" });
        let (status, _) = post_json(app(), "/api/game/ai-move", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let body = json!({ "board": [[null]], "aiColor": "black", "difficulty": "easy" });
        let (status, json) = post_json(app(), "/api/game/ai-move", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("invalid board"));
    }

    #[tokio::test]
    async fn test_ai_move_malformed_json() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/game/ai-move")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_timeout_falls_back_to_easy() {
        let state = AppState::new(Engine::new(), Duration::ZERO);
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        let result = compute_move(&state, board, Stone::White, Difficulty::Hard)
            .await
            .unwrap();
        assert!(result.best_move.is_some());
    }

    #[tokio::test]
    async fn test_judge_ongoing_and_win() {
        let mut rows = empty_rows();
        for c in 0..4 {
            rows[0][c] = json!("black");
            rows[1][c] = json!("white");
        }
        let body = json!({ "board": rows, "move": { "row": 5, "col": 5, "color": "black" } });
        let (status, json) = post_json(app(), "/api/game/judge", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({ "status": "ongoing" }));

        let body = json!({ "board": rows, "move": { "row": 0, "col": 4, "color": "black" } });
        let (status, json) = post_json(app(), "/api/game/judge", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "win");
        assert_eq!(json["winner"], "black");
        assert_eq!(json["winningLine"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_judge_rejects_illegal_moves() {
        let mut rows = empty_rows();
        rows[7][7] = json!("black");

        let body = json!({ "board": rows, "move": { "row": 7, "col": 7, "color": "white" } });
        let (status, json) = post_json(app(), "/api/game/judge", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("occupied"));

        let body = json!({ "board": rows, "move": { "row": 15, "col": 0, "color": "white" } });
        let (status, _) = post_json(app(), "/api/game/judge", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let body = json!({ "board": rows, "move": { "row": 3, "col": 3, "color": "black" } });
        let (status, json) = post_json(app(), "/api/game/judge", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("turn"));
    }
}
