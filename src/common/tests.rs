use crate::config::test_helpers::setup_test_app;
use crate::test_helpers::{create_ownership_chain, create_test_batch, get_json};
use axum::http::StatusCode;

#[tokio::test]
async fn test_healthz() {
    let app = setup_test_app().await;

    let (status, body) = get_json(&app, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_stats_empty_portal() {
    let app = setup_test_app().await;

    let (status, body) = get_json(&app, "/api/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_batches"], 0);
    assert_eq!(body["total_samples"], 0);
    assert_eq!(body["total_companies"], 0);
    assert_eq!(body["completed_batches"], 0);
}

#[tokio::test]
async fn test_stats_counts_submissions() {
    let app = setup_test_app().await;

    let chain = create_ownership_chain(&app, None).await;
    create_test_batch(&app, &chain, 2).await;

    let (status, body) = get_json(&app, "/api/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_batches"], 1);
    assert_eq!(body["total_samples"], 2);
    assert_eq!(body["total_companies"], 1);
    // No lab results imported yet
    assert_eq!(body["completed_batches"], 0);
}
