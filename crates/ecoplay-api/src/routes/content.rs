//! Content provider endpoints.
//!
//! These serve the local catalog in the shape remote providers use, so one
//! server can act as the upstream of another.

use axum::extract::{Query, State};
use axum::{Json, Router, routing::get};
use ecoplay_adventure::domain::scenario::Scenario;
use ecoplay_quiz::domain::question::Question;
use ecoplay_words::domain::word::{Difficulty, WordEntry, WordMode};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::ApiError;
use crate::state::AppState;

/// Query string for GET /get_words.
#[derive(Debug, Deserialize)]
pub struct WordsQuery {
    /// Word difficulty; medium when absent.
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Game mode; hangman when absent. The list does not depend on it.
    #[serde(default)]
    pub mode: WordMode,
}

/// GET /get_scenarios
#[instrument(skip(state))]
async fn get_scenarios(State(state): State<AppState>) -> Json<Vec<Scenario>> {
    let scenarios = state.catalog.scenarios();
    debug!(count = scenarios.len(), "serving scenarios");
    Json(scenarios)
}

/// GET /get_questions
#[instrument(skip(state))]
async fn get_questions(State(state): State<AppState>) -> Result<Json<Vec<Question>>, ApiError> {
    let questions = state.catalog.questions()?;
    debug!(count = questions.len(), "serving questions");
    Ok(Json(questions))
}

/// GET /get_words
#[instrument(skip(state, query), fields(difficulty = %query.difficulty, mode = %query.mode))]
async fn get_words(
    State(state): State<AppState>,
    Query(query): Query<WordsQuery>,
) -> Json<Vec<WordEntry>> {
    let words = state.catalog.words(query.difficulty);
    debug!(count = words.len(), "serving words");
    Json(words)
}

/// Returns the content provider router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/get_scenarios", get(get_scenarios))
        .route("/get_questions", get(get_questions))
        .route("/get_words", get(get_words))
}
