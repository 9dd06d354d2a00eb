//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use ecoplay_adventure::application::source::ScenarioSource;
use ecoplay_adventure::domain::scenario::Scenario;
use ecoplay_content::catalog::ContentCatalog;
use ecoplay_core::clock::Clock;
use ecoplay_core::error::DomainError;
use ecoplay_core::rng::shared;
use ecoplay_quiz::application::source::QuestionSource;
use ecoplay_quiz::domain::question::Question;
use ecoplay_test_support::{FixedClock, SequenceRng};
use ecoplay_words::application::source::WordSource;
use ecoplay_words::domain::word::{Difficulty, WordEntry, WordMode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use ecoplay_api::routes;
use ecoplay_api::state::{AppState, ContentSources};

/// Countdown length used by word game tests.
pub const WORD_TIME_LIMIT_SECS: u32 = 60;

/// Fixed timestamp used across all integration tests.
fn fixed_clock() -> Arc<dyn Clock + Send + Sync> {
    Arc::new(FixedClock(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap(),
    ))
}

/// A content source whose provider is always down.
pub struct FailingContentSource;

#[async_trait]
impl ScenarioSource for FailingContentSource {
    async fn fetch_scenarios(&self) -> Result<Vec<Scenario>, DomainError> {
        Err(DomainError::ContentUnavailable("provider unreachable".into()))
    }
}

#[async_trait]
impl QuestionSource for FailingContentSource {
    async fn fetch_questions(&self) -> Result<Vec<Question>, DomainError> {
        Err(DomainError::ContentUnavailable("provider unreachable".into()))
    }
}

#[async_trait]
impl WordSource for FailingContentSource {
    async fn fetch_words(
        &self,
        _difficulty: Difficulty,
        _mode: WordMode,
    ) -> Result<Vec<WordEntry>, DomainError> {
        Err(DomainError::ContentUnavailable("provider unreachable".into()))
    }
}

/// Sources that all fail.
pub fn failing_sources() -> ContentSources {
    let failing = Arc::new(FailingContentSource);
    ContentSources {
        scenarios: Arc::clone(&failing) as Arc<dyn ScenarioSource>,
        questions: Arc::clone(&failing) as Arc<dyn QuestionSource>,
        words: failing as Arc<dyn WordSource>,
    }
}

/// The built-in catalog with a deterministic shuffle.
pub fn test_catalog() -> Arc<ContentCatalog> {
    Arc::new(ContentCatalog::built_in(shared(SequenceRng::new(vec![0]))))
}

/// Build the full app router over the built-in catalog with deterministic
/// Clock/RNG. Uses the same route structure as `main.rs`.
pub fn build_test_app() -> Router {
    let catalog = test_catalog();
    let sources = ContentSources::local(&catalog);
    build_test_app_with(catalog, sources)
}

/// Build the full app router with custom content sources.
pub fn build_test_app_with(catalog: Arc<ContentCatalog>, sources: ContentSources) -> Router {
    let rng = shared(SequenceRng::new(vec![0]));
    let app_state = AppState::new(catalog, sources, fixed_clock(), rng, WORD_TIME_LIMIT_SECS);

    Router::new()
        .merge(routes::health::router())
        .merge(routes::content::router())
        .nest("/api/v1/adventure", routes::adventure::router())
        .nest("/api/v1/quiz", routes::quiz::router())
        .nest("/api/v1/words", routes::words::router())
        .with_state(app_state)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// Send a POST request without a body and return the response.
pub async fn post_empty(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// Send a DELETE request and return the response.
pub async fn delete(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}
