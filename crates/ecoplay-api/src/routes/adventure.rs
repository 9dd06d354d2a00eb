//! Routes for the Eco-Adventure game.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use ecoplay_adventure::application::command_handlers;
use ecoplay_adventure::application::engine::AdventureGame;
use ecoplay_adventure::domain::commands::AdventureAction;
use ecoplay_session::GameSnapshot;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Snapshot of an adventure session.
pub type AdventureSnapshot = GameSnapshot<AdventureGame>;

/// POST /sessions
#[instrument(skip(state))]
async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<AdventureSnapshot>), ApiError> {
    let game = command_handlers::handle_start_adventure(&*state.sources.scenarios).await;
    let handle = state.adventures.start(game)?;

    info!(session_id = %handle.id(), "adventure session created");

    Ok((StatusCode::CREATED, Json(handle.snapshot().await?)))
}

/// GET /sessions/{session_id}
#[instrument(skip(state))]
async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<AdventureSnapshot>, ApiError> {
    let snapshot = state.adventures.get(session_id)?.snapshot().await?;
    Ok(Json(snapshot))
}

/// POST /sessions/{session_id}/actions
#[instrument(skip(state, action), fields(action = ?action))]
async fn act(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(action): Json<AdventureAction>,
) -> Result<Json<AdventureSnapshot>, ApiError> {
    let snapshot = state.adventures.get(session_id)?.act(action).await?;
    Ok(Json(snapshot))
}

/// POST /sessions/{session_id}/restart
#[instrument(skip(state))]
async fn restart(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<AdventureSnapshot>, ApiError> {
    info!("restarting adventure session");
    let snapshot = state.adventures.get(session_id)?.restart().await?;
    Ok(Json(snapshot))
}

/// DELETE /sessions/{session_id}
#[instrument(skip(state))]
async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.adventures.remove(session_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Returns the router for the adventure game.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(create_session))
        .route("/sessions/{session_id}", get(get_session).delete(delete_session))
        .route("/sessions/{session_id}/actions", post(act))
        .route("/sessions/{session_id}/restart", post(restart))
}
