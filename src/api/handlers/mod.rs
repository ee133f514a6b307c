use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};

use jeopardy_core::{BoardError, Coord, Reveal};

use super::{AppState, BoardView, RevealInput};
use crate::game::GameError;
use crate::provider::TriviaProvider;

const INDEX_HTML: &str = include_str!("../index.html");

// ============================================================
// Error Handling
// ============================================================

/// Map a game error to a status code, logging it server-side.
///
/// Bad coordinates come from a broken page and get BAD_REQUEST; clicks that
/// race a restart get CONFLICT; provider failures during a load are
/// BAD_GATEWAY.
fn game_error(e: GameError) -> (StatusCode, String) {
    let msg = e.to_string();
    match e {
        GameError::Board(BoardError::OutOfRange { .. }) => {
            tracing::warn!("Rejected click: {}", msg);
            (StatusCode::BAD_REQUEST, msg)
        }
        GameError::NotReady(_) | GameError::StaleGame(_) | GameError::Superseded => {
            tracing::warn!("Conflict: {}", msg);
            (StatusCode::CONFLICT, msg)
        }
        GameError::Board(_) => {
            tracing::error!("Board load failed: {}", msg);
            (StatusCode::BAD_GATEWAY, msg)
        }
    }
}

// ============================================================
// Page + Health
// ============================================================

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Game
// ============================================================

/// Start or restart: drop the current board, load a new one, and return it.
///
/// The load runs on its own task so a client that goes away mid-load still
/// leaves the session ready or failed, never stuck loading.
pub async fn start_game<P: TriviaProvider + 'static>(
    State(state): State<AppState<P>>,
) -> Result<(StatusCode, Json<BoardView>), (StatusCode, String)> {
    let ticket = state.lock_session().begin_load();

    let task_state = state.clone();
    let load = tokio::spawn(async move {
        let loaded = task_state.loader.new_board().await;

        let mut session = task_state.lock_session();
        match loaded {
            Ok(board) => session.commit(ticket, board).map(BoardView::from),
            Err(e) => {
                session.fail(ticket, e.to_string());
                Err(GameError::from(e))
            }
        }
    });

    match load.await {
        Ok(result) => result
            .map(|view| (StatusCode::CREATED, Json(view)))
            .map_err(game_error),
        Err(e) => {
            tracing::error!("Board load task failed: {}", e);
            state.lock_session().fail(ticket, "load aborted");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

pub async fn get_game<P: TriviaProvider>(
    State(state): State<AppState<P>>,
) -> Result<Json<BoardView>, (StatusCode, String)> {
    let session = state.lock_session();
    match session.game() {
        Some(game) => Ok(Json(BoardView::from(game))),
        None => {
            let msg = match session.failure() {
                Some(reason) => format!("No game is ready (failed: {})", reason),
                None => format!("No game is ready ({})", session.status()),
            };
            Err((StatusCode::NOT_FOUND, msg))
        }
    }
}

pub async fn reveal_clue<P: TriviaProvider>(
    State(state): State<AppState<P>>,
    Json(input): Json<RevealInput>,
) -> Result<Json<Reveal>, (StatusCode, String)> {
    let coord = Coord::new(input.category, input.clue);
    let mut session = state.lock_session();
    let result = match input.game_id {
        Some(game_id) => session.reveal_in(game_id, coord),
        None => session.reveal(coord),
    };
    result.map(Json).map_err(game_error)
}
