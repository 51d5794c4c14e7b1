//! Integration tests for the probe and metrics endpoints.

mod common;

use blog_service::services::providers::mock::MockCompletionProvider;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn health_check_returns_ok() {
    let app = TestApp::spawn(MockCompletionProvider::failing()).await;

    let response = reqwest::get(format!("{}/health", app.address))
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "blog-service");
}

#[tokio::test]
async fn health_check_reports_unhealthy_provider() {
    let app = TestApp::spawn(MockCompletionProvider::unhealthy()).await;

    let response = reqwest::get(format!("{}/health", app.address))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 503);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["service"], "blog-service");
}

#[tokio::test]
async fn readiness_check_returns_ok() {
    let app = TestApp::spawn(MockCompletionProvider::failing()).await;

    let response = reqwest::get(format!("{}/ready", app.address))
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

#[tokio::test]
async fn metrics_endpoint_reports_generation_counters() {
    let app = TestApp::spawn(MockCompletionProvider::failing()).await;

    // Drive one request through so the counters have samples
    let response = app
        .post_json("/generate-ideas", &json!({"topic": "metrics"}))
        .await;
    assert!(response.status().is_success());

    let response = reqwest::get(format!("{}/metrics", app.address))
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("generation_requests_total"));
}
