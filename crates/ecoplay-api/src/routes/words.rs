//! Routes for the Word game (hangman and scramble).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use ecoplay_session::GameSnapshot;
use ecoplay_words::application::command_handlers;
use ecoplay_words::application::engine::WordGame;
use ecoplay_words::domain::commands::WordAction;
use ecoplay_words::domain::word::WordSettings;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Snapshot of a word game session.
pub type WordSnapshot = GameSnapshot<WordGame>;

/// POST /sessions
#[instrument(
    skip(state, settings),
    fields(difficulty = %settings.difficulty, mode = %settings.mode, timed = settings.timed)
)]
async fn create_session(
    State(state): State<AppState>,
    Json(settings): Json<WordSettings>,
) -> Result<(StatusCode, Json<WordSnapshot>), ApiError> {
    let game = command_handlers::handle_start_word_game(
        &*state.sources.words,
        settings,
        state.word_time_limit_secs,
    )
    .await;
    let handle = state.word_games.start(game)?;

    info!(session_id = %handle.id(), "word game session created");

    Ok((StatusCode::CREATED, Json(handle.snapshot().await?)))
}

/// GET /sessions/{session_id}
#[instrument(skip(state))]
async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WordSnapshot>, ApiError> {
    let snapshot = state.word_games.get(session_id)?.snapshot().await?;
    Ok(Json(snapshot))
}

/// POST /sessions/{session_id}/actions
#[instrument(skip(state, action), fields(action = ?action))]
async fn act(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(action): Json<WordAction>,
) -> Result<Json<WordSnapshot>, ApiError> {
    let snapshot = state.word_games.get(session_id)?.act(action).await?;
    Ok(Json(snapshot))
}

/// POST /sessions/{session_id}/restart
#[instrument(skip(state))]
async fn restart(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WordSnapshot>, ApiError> {
    info!("restarting word game session");
    let snapshot = state.word_games.get(session_id)?.restart().await?;
    Ok(Json(snapshot))
}

/// DELETE /sessions/{session_id}
#[instrument(skip(state))]
async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.word_games.remove(session_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Returns the router for the word game.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(create_session))
        .route("/sessions/{session_id}", get(get_session).delete(delete_session))
        .route("/sessions/{session_id}/actions", post(act))
        .route("/sessions/{session_id}/restart", post(restart))
}
