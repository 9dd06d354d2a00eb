//! Integration tests for sessions fed by a remote content provider.

mod common;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use ecoplay_api::state::ContentSources;
use ecoplay_content::http::HttpContentSource;
use serde_json::json;

/// Serves a full app on an ephemeral port and returns its address.
async fn spawn_provider() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = common::build_test_app();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// An address nothing is listening on.
async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

fn upstream_sources(addr: SocketAddr) -> ContentSources {
    let client =
        HttpContentSource::new(&format!("http://{addr}/"), Duration::from_secs(5)).unwrap();
    ContentSources::upstream(Arc::new(client))
}

#[tokio::test]
async fn test_sessions_load_content_from_upstream() {
    // Arrange
    let addr = spawn_provider().await;
    let app = common::build_test_app_with(common::test_catalog(), upstream_sources(addr));

    // Act
    let (adventure_status, adventure) =
        common::post_empty(app.clone(), "/api/v1/adventure/sessions").await;
    let (quiz_status, quiz) = common::post_empty(app.clone(), "/api/v1/quiz/sessions").await;
    let (words_status, words) = common::post_json(
        app,
        "/api/v1/words/sessions",
        &json!({ "difficulty": "easy", "timed": false }),
    )
    .await;

    // Assert
    assert_eq!(adventure_status, StatusCode::CREATED);
    assert_eq!(adventure["view"]["origin"], "provider");
    assert_eq!(adventure["view"]["screen"]["scenario_id"], 1);
    assert_eq!(quiz_status, StatusCode::CREATED);
    assert_eq!(quiz["view"]["total"], 10);
    assert_eq!(words_status, StatusCode::CREATED);
    assert_eq!(words["view"]["origin"], "provider");
}

#[tokio::test]
async fn test_unreachable_upstream_falls_back_or_fails() {
    // Arrange
    let addr = closed_addr().await;
    let app = common::build_test_app_with(common::test_catalog(), upstream_sources(addr));

    // Act
    let (_, adventure) = common::post_empty(app.clone(), "/api/v1/adventure/sessions").await;
    let (quiz_status, quiz) = common::post_empty(app.clone(), "/api/v1/quiz/sessions").await;
    let (_, words) = common::post_json(app, "/api/v1/words/sessions", &json!({})).await;

    // Assert
    assert_eq!(adventure["view"]["origin"], "fallback");
    assert_eq!(adventure["view"]["screen"]["scenario_id"], 1);
    assert_eq!(quiz_status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(quiz["error"], "content_unavailable");
    assert_eq!(words["view"]["origin"], "fallback");
}
