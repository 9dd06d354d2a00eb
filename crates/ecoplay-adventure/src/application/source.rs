//! Port for fetching scenarios from the content provider.

use async_trait::async_trait;
use ecoplay_core::error::DomainError;

use crate::domain::scenario::Scenario;

/// Supplies the ordered scenario list for a new playthrough.
#[async_trait]
pub trait ScenarioSource: Send + Sync {
    /// Fetches every scenario.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ContentUnavailable` if the provider cannot be
    /// reached or returns data that does not decode.
    async fn fetch_scenarios(&self) -> Result<Vec<Scenario>, DomainError>;
}
