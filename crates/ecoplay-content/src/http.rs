//! HTTP client for a remote content provider.
//!
//! The provider exposes `GET /get_scenarios`, `GET /get_questions` and
//! `GET /get_words?difficulty=&mode=`, each answering with a JSON array.

use std::time::Duration;

use async_trait::async_trait;
use ecoplay_adventure::application::source::ScenarioSource;
use ecoplay_adventure::domain::scenario::Scenario;
use ecoplay_core::error::DomainError;
use ecoplay_quiz::application::source::QuestionSource;
use ecoplay_quiz::domain::question::Question;
use ecoplay_words::application::source::WordSource;
use ecoplay_words::domain::word::{Difficulty, WordEntry, WordMode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ContentError;

/// Fetches content from a remote provider.
#[derive(Debug, Clone)]
pub struct HttpContentSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpContentSource {
    /// Creates a client for the provider at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Client` if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ContentError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// The provider's base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, DomainError> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "fetching content");
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| unavailable(&url, &e))?
            .error_for_status()
            .map_err(|e| unavailable(&url, &e))?;
        response.json::<T>().await.map_err(|e| unavailable(&url, &e))
    }
}

fn unavailable(url: &str, err: &reqwest::Error) -> DomainError {
    DomainError::ContentUnavailable(format!("{url}: {err}"))
}

#[async_trait]
impl ScenarioSource for HttpContentSource {
    async fn fetch_scenarios(&self) -> Result<Vec<Scenario>, DomainError> {
        self.get_json("/get_scenarios", &[]).await
    }
}

#[async_trait]
impl QuestionSource for HttpContentSource {
    async fn fetch_questions(&self) -> Result<Vec<Question>, DomainError> {
        self.get_json("/get_questions", &[]).await
    }
}

#[async_trait]
impl WordSource for HttpContentSource {
    async fn fetch_words(
        &self,
        difficulty: Difficulty,
        mode: WordMode,
    ) -> Result<Vec<WordEntry>, DomainError> {
        self.get_json(
            "/get_words",
            &[("difficulty", difficulty.as_str()), ("mode", mode.as_str())],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ecoplay_core::error::DomainError;

    use super::*;

    async fn closed_port_url() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let source =
            HttpContentSource::new("http://provider.test/", Duration::from_secs(1)).unwrap();

        assert_eq!(source.base_url(), "http://provider.test");
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_content_unavailable() {
        // Arrange
        let source =
            HttpContentSource::new(&closed_port_url().await, Duration::from_secs(2)).unwrap();

        // Act
        let result = source.fetch_questions().await;

        // Assert
        assert!(matches!(result, Err(DomainError::ContentUnavailable(_))));
    }

    #[tokio::test]
    async fn test_unreachable_provider_fails_every_kind() {
        let source =
            HttpContentSource::new(&closed_port_url().await, Duration::from_secs(2)).unwrap();

        assert!(source.fetch_scenarios().await.is_err());
        assert!(
            source
                .fetch_words(Difficulty::Easy, WordMode::Hangman)
                .await
                .is_err()
        );
    }
}
