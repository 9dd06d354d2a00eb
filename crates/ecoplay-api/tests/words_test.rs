//! Integration tests for the Word game.

mod common;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::http::StatusCode;
use ecoplay_core::error::DomainError;
use ecoplay_words::application::source::WordSource;
use ecoplay_words::domain::word::{Difficulty, WordEntry, WordMode};
use serde_json::{Value, json};

struct StaticWordSource(Vec<&'static str>);

#[async_trait]
impl WordSource for StaticWordSource {
    async fn fetch_words(
        &self,
        _difficulty: Difficulty,
        _mode: WordMode,
    ) -> Result<Vec<WordEntry>, DomainError> {
        Ok(self
            .0
            .iter()
            .map(|word| WordEntry {
                word: (*word).to_owned(),
                hint: format!("Clue for {word}"),
            })
            .collect())
    }
}

fn app_with_words(words: Vec<&'static str>) -> Router {
    let catalog = common::test_catalog();
    let mut sources = ecoplay_api::state::ContentSources::local(&catalog);
    sources.words = Arc::new(StaticWordSource(words));
    common::build_test_app_with(catalog, sources)
}

async fn create(app: &Router, settings: &Value) -> (String, Value) {
    let (status, json) = common::post_json(app.clone(), "/api/v1/words/sessions", settings).await;
    assert_eq!(status, StatusCode::CREATED);
    (json["session_id"].as_str().unwrap().to_owned(), json)
}

async fn act(app: &Router, session_id: &str, action: &Value) -> Value {
    let (status, json) = common::post_json(
        app.clone(),
        &format!("/api/v1/words/sessions/{session_id}/actions"),
        action,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    json
}

#[tokio::test]
async fn test_words_timed_hangman_by_default() {
    let app = common::build_test_app();

    let (_, created) = create(&app, &json!({})).await;

    assert_eq!(created["view"]["mode"], "hangman");
    assert_eq!(created["view"]["difficulty"], "medium");
    assert_eq!(created["view"]["time_left"], common::WORD_TIME_LIMIT_SECS);
    assert_eq!(created["view"]["position"], 1);
    assert_eq!(created["view"]["screen"]["screen"], "hangman");
}

#[tokio::test]
async fn test_words_hint_then_skip_costs_fifteen() {
    // Arrange
    let app = common::build_test_app();
    let (session_id, _) =
        create(&app, &json!({ "difficulty": "easy", "mode": "scramble", "timed": false })).await;

    // Act
    let hinted = act(&app, &session_id, &json!({ "type": "hint" })).await;
    let skipped = act(&app, &session_id, &json!({ "type": "skip" })).await;

    // Assert
    assert_eq!(hinted["view"]["score"], -5);
    assert!(hinted["view"]["screen"]["hint"].is_string());
    assert_eq!(skipped["view"]["score"], -15);
    assert_eq!(skipped["view"]["position"], 2);
    assert!(skipped["view"]["time_left"].is_null());
}

#[tokio::test]
async fn test_words_wrong_mode_action_is_ignored() {
    let app = common::build_test_app();
    let (session_id, _) = create(&app, &json!({ "mode": "hangman", "timed": false })).await;

    let snapshot = act(&app, &session_id, &json!({ "type": "submit", "answer": "planet" })).await;

    assert_eq!(snapshot["view"]["score"], 0);
    assert_eq!(snapshot["events"][0]["type"], "action_ignored");
}

#[tokio::test(start_paused = true)]
async fn test_words_solved_scramble_advances_to_results() {
    // Arrange
    let app = app_with_words(vec!["sun"]);
    let (session_id, created) =
        create(&app, &json!({ "mode": "scramble", "timed": false })).await;

    // Act
    let solved = act(&app, &session_id, &json!({ "type": "submit", "answer": "Sun" })).await;
    tokio::time::sleep(Duration::from_secs(2)).await;
    let (status, later) =
        common::get_json(app, &format!("/api/v1/words/sessions/{session_id}")).await;

    // Assert
    assert_eq!(created["view"]["origin"], "provider");
    assert_ne!(created["view"]["screen"]["scrambled"], "SUN");
    assert_eq!(solved["view"]["score"], 13);
    assert_eq!(solved["view"]["screen"]["phase"], "word_complete");
    assert_eq!(solved["view"]["screen"]["solution"], "SUN");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(later["ended"], true);
    assert_eq!(later["view"]["screen"]["screen"], "results");
    assert_eq!(later["view"]["screen"]["stats"]["completion_rate"], 100);
}

#[tokio::test]
async fn test_words_fall_back_when_provider_fails() {
    let app = common::build_test_app_with(common::test_catalog(), common::failing_sources());

    let (_, created) = create(&app, &json!({ "difficulty": "hard" })).await;

    assert_eq!(created["view"]["origin"], "fallback");
    assert_eq!(created["view"]["difficulty"], "hard");
}

#[tokio::test]
async fn test_words_restart_resets_score_and_epoch() {
    let app = common::build_test_app();
    let (session_id, _) = create(&app, &json!({ "timed": false })).await;
    act(&app, &session_id, &json!({ "type": "skip" })).await;

    let (status, restarted) = common::post_empty(
        app,
        &format!("/api/v1/words/sessions/{session_id}/restart"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(restarted["epoch"], 1);
    assert_eq!(restarted["view"]["score"], 0);
    assert_eq!(restarted["view"]["position"], 1);
}
