//! Port for fetching words from the content provider.

use async_trait::async_trait;
use ecoplay_core::error::DomainError;

use crate::domain::word::{Difficulty, WordEntry, WordMode};

/// Supplies the word list for a new game.
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Fetches words for `difficulty` and `mode`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ContentUnavailable` if the provider cannot be
    /// reached or returns data that does not decode.
    async fn fetch_words(
        &self,
        difficulty: Difficulty,
        mode: WordMode,
    ) -> Result<Vec<WordEntry>, DomainError>;
}
