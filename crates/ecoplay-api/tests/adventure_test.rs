//! Integration tests for the Eco-Adventure game.

mod common;

use axum::Router;
use axum::http::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

async fn create(app: &Router) -> (String, Value) {
    let (status, json) = common::post_empty(app.clone(), "/api/v1/adventure/sessions").await;
    assert_eq!(status, StatusCode::CREATED);
    let session_id = json["session_id"].as_str().unwrap().to_owned();
    (session_id, json)
}

async fn act(app: &Router, session_id: &str, action: &Value) -> Value {
    let (status, json) = common::post_json(
        app.clone(),
        &format!("/api/v1/adventure/sessions/{session_id}/actions"),
        action,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    json
}

/// Picks the first choice of every scenario until the adventure ends.
async fn play_first_choices(app: &Router, session_id: &str, mut snapshot: Value) -> Value {
    for _ in 0..40 {
        if snapshot["ended"] == true {
            return snapshot;
        }
        let screen = &snapshot["view"]["screen"];
        let action = match screen["screen"].as_str().unwrap() {
            "scenario" => json!({ "type": "choose", "choice_id": screen["choices"][0]["id"] }),
            "feedback" => json!({ "type": "continue" }),
            other => panic!("unexpected screen {other}"),
        };
        snapshot = act(app, session_id, &action).await;
    }
    panic!("adventure did not end");
}

#[tokio::test]
async fn test_adventure_first_choice_flow() {
    // Arrange
    let app = common::build_test_app();
    let (session_id, created) = create(&app).await;

    // Act
    let chosen = act(&app, &session_id, &json!({ "type": "choose", "choice_id": "1A" })).await;
    let continued = act(&app, &session_id, &json!({ "type": "continue" })).await;

    // Assert
    assert_eq!(created["view"]["origin"], "provider");
    assert_eq!(created["started_at"], "2026-01-15T10:00:00Z");
    assert_eq!(chosen["view"]["score"], 10);
    assert_eq!(chosen["view"]["screen"]["screen"], "feedback");
    assert_eq!(chosen["view"]["screen"]["points"], 10);
    assert_eq!(continued["view"]["chapter"], 2);
    assert_eq!(continued["view"]["screen"]["scenario_id"], 2);
}

#[tokio::test]
async fn test_adventure_playthrough_reaches_ending() {
    let app = common::build_test_app();
    let (session_id, created) = create(&app).await;

    let ended = play_first_choices(&app, &session_id, created).await;

    // 10 + 15 + 10 + 15 - 10 + 10 + 5 + 15 + 10 + 15
    assert_eq!(ended["view"]["score"], 95);
    assert_eq!(ended["view"]["screen"]["screen"], "ended");
    assert_eq!(ended["view"]["screen"]["ending"]["tier"], "champion");
    assert_eq!(ended["view"]["screen"]["history"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_adventure_falls_back_when_provider_fails() {
    let app = common::build_test_app_with(common::test_catalog(), common::failing_sources());

    let (_, created) = create(&app).await;

    assert_eq!(created["view"]["origin"], "fallback");
    assert_eq!(created["view"]["screen"]["scenario_id"], 1);
}

#[tokio::test]
async fn test_adventure_unknown_choice_is_ignored() {
    let app = common::build_test_app();
    let (session_id, _) = create(&app).await;

    let snapshot = act(&app, &session_id, &json!({ "type": "choose", "choice_id": "9Z" })).await;

    assert_eq!(snapshot["view"]["score"], 0);
    assert_eq!(snapshot["view"]["screen"]["screen"], "scenario");
    assert_eq!(snapshot["events"][0]["type"], "action_ignored");
}

#[tokio::test]
async fn test_adventure_restart_and_delete() {
    let app = common::build_test_app();
    let (session_id, _) = create(&app).await;
    act(&app, &session_id, &json!({ "type": "choose", "choice_id": "1A" })).await;

    let (status, restarted) = common::post_empty(
        app.clone(),
        &format!("/api/v1/adventure/sessions/{session_id}/restart"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(restarted["epoch"], 1);
    assert_eq!(restarted["view"]["score"], 0);

    let uri = format!("/api/v1/adventure/sessions/{session_id}");
    let (status, _) = common::delete(app.clone(), &uri).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, json) = common::get_json(app, &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "session_not_found");
}

#[tokio::test]
async fn test_adventure_delete_unknown_session_returns_404() {
    let app = common::build_test_app();

    let (status, _) =
        common::delete(app, &format!("/api/v1/adventure/sessions/{}", Uuid::new_v4())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
