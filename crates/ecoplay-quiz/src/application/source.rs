//! Port for fetching questions from the content provider.

use async_trait::async_trait;
use ecoplay_core::error::DomainError;

use crate::domain::question::Question;

/// Supplies the question list for a new quiz.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetches the questions, already in play order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ContentUnavailable` if the provider cannot be
    /// reached or returns data that does not decode.
    async fn fetch_questions(&self) -> Result<Vec<Question>, DomainError>;
}
