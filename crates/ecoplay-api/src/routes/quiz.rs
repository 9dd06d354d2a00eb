//! Routes for the Quiz game.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use ecoplay_quiz::application::command_handlers;
use ecoplay_quiz::application::engine::QuizGame;
use ecoplay_quiz::domain::commands::QuizAction;
use ecoplay_session::GameSnapshot;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Snapshot of a quiz session.
pub type QuizSnapshot = GameSnapshot<QuizGame>;

/// POST /sessions
#[instrument(skip(state))]
async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<QuizSnapshot>), ApiError> {
    let game = command_handlers::handle_start_quiz(&*state.sources.questions).await?;
    let questions = game.questions().len();
    let handle = state.quizzes.start(game)?;

    info!(session_id = %handle.id(), questions, "quiz session created");

    Ok((StatusCode::CREATED, Json(handle.snapshot().await?)))
}

/// GET /sessions/{session_id}
#[instrument(skip(state))]
async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<QuizSnapshot>, ApiError> {
    let snapshot = state.quizzes.get(session_id)?.snapshot().await?;
    Ok(Json(snapshot))
}

/// POST /sessions/{session_id}/actions
#[instrument(skip(state, action), fields(action = ?action))]
async fn act(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(action): Json<QuizAction>,
) -> Result<Json<QuizSnapshot>, ApiError> {
    let snapshot = state.quizzes.get(session_id)?.act(action).await?;
    Ok(Json(snapshot))
}

/// POST /sessions/{session_id}/restart
#[instrument(skip(state))]
async fn restart(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<QuizSnapshot>, ApiError> {
    info!("restarting quiz session");
    let snapshot = state.quizzes.get(session_id)?.restart().await?;
    Ok(Json(snapshot))
}

/// DELETE /sessions/{session_id}
#[instrument(skip(state))]
async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.quizzes.remove(session_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Returns the router for the quiz game.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(create_session))
        .route("/sessions/{session_id}", get(get_session).delete(delete_session))
        .route("/sessions/{session_id}/actions", post(act))
        .route("/sessions/{session_id}/restart", post(restart))
}
