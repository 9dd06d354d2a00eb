//! Command handlers for the Quiz context.

use ecoplay_core::error::DomainError;
use tracing::{info, warn};

use crate::application::engine::QuizGame;
use crate::application::source::QuestionSource;

/// Handles a start request: fetches questions and binds them to an engine.
///
/// Malformed questions are dropped. There is no built-in question list, so
/// the caller goes back to its start screen on error.
///
/// # Errors
///
/// Returns `DomainError::ContentUnavailable` if the fetch fails or leaves
/// no valid question.
pub async fn handle_start_quiz(source: &dyn QuestionSource) -> Result<QuizGame, DomainError> {
    let fetched = source.fetch_questions().await.inspect_err(|e| {
        warn!(error = %e, "question fetch failed");
    })?;
    let fetched_count = fetched.len();
    let questions: Vec<_> = fetched.into_iter().filter(|q| q.is_valid()).collect();
    if questions.len() < fetched_count {
        warn!(
            dropped = fetched_count - questions.len(),
            "dropped malformed questions"
        );
    }
    if questions.is_empty() {
        return Err(DomainError::ContentUnavailable(
            "no valid questions available".to_owned(),
        ));
    }
    info!(count = questions.len(), "questions loaded");
    Ok(QuizGame::new(questions))
}
