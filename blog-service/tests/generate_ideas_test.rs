//! Integration tests for the /generate-ideas endpoint.

mod common;

use blog_service::services::providers::mock::MockCompletionProvider;
use common::TestApp;
use serde_json::{json, Value};

#[tokio::test]
async fn returns_five_ideas_from_model_output() {
    let model_output = json!([
        {"title": "Container Gardens for Tiny Balconies", "description": "Make the most of limited space."},
        {"title": "Composting Without a Backyard", "description": "Indoor-friendly composting setups."},
        {"title": "Vegetables That Thrive in Shade", "description": "What to plant when sun is scarce."},
        {"title": "A Beginner's Watering Schedule", "description": "How much is too much."},
        {"title": "Pest Control Without Pesticides", "description": "Companion planting and other tricks."}
    ])
    .to_string();
    let app = TestApp::spawn(MockCompletionProvider::respond_with(model_output)).await;

    let response = app
        .post_json("/generate-ideas", &json!({"topic": "urban gardening"}))
        .await;
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse JSON");
    let ideas = body["ideas"].as_array().expect("ideas should be an array");
    assert_eq!(ideas.len(), 5);

    for idea in ideas {
        assert_eq!(idea["topic"], "urban gardening");
        assert!(!idea["title"].as_str().unwrap().is_empty());
        assert!(!idea["description"].as_str().unwrap().is_empty());
        assert!(idea["id"].as_str().unwrap().starts_with("generated_"));
    }
    assert_eq!(
        ideas[0]["title"],
        "Container Gardens for Tiny Balconies"
    );
}

#[tokio::test]
async fn pads_to_five_when_model_returns_fewer() {
    let model_output = json!([
        {"title": "Opening Theory for Club Players", "description": "Repertoires that survive contact."},
        {"title": "Endgames Everyone Should Know", "description": "The positions that decide games."}
    ])
    .to_string();
    let app = TestApp::spawn(MockCompletionProvider::respond_with(model_output)).await;

    let response = app
        .post_json("/generate-ideas", &json!({"topic": "chess"}))
        .await;
    let body: Value = response.json().await.unwrap();
    let ideas = body["ideas"].as_array().unwrap();

    assert_eq!(ideas.len(), 5);
    assert_eq!(ideas[0]["title"], "Opening Theory for Club Players");
    assert_eq!(ideas[2]["title"], "chess Trends to Watch This Year");
    assert_eq!(
        ideas[4]["title"],
        "The Future of chess: What Experts Predict"
    );
}

#[tokio::test]
async fn truncates_when_model_returns_extras() {
    let extras: Vec<Value> = (1..=7)
        .map(|i| json!({"title": format!("Idea {i}"), "description": format!("Description {i}")}))
        .collect();
    let app =
        TestApp::spawn(MockCompletionProvider::respond_with(json!(extras).to_string())).await;

    let response = app
        .post_json("/generate-ideas", &json!({"topic": "sourdough"}))
        .await;
    let body: Value = response.json().await.unwrap();
    let ideas = body["ideas"].as_array().unwrap();

    assert_eq!(ideas.len(), 5);
    assert_eq!(ideas[4]["title"], "Idea 5");
}

#[tokio::test]
async fn wraps_a_bare_object_into_a_list() {
    let model_output =
        json!({"title": "A Single Idea", "description": "The model ignored the array request."})
            .to_string();
    let app = TestApp::spawn(MockCompletionProvider::respond_with(model_output)).await;

    let response = app
        .post_json("/generate-ideas", &json!({"topic": "origami"}))
        .await;
    let body: Value = response.json().await.unwrap();
    let ideas = body["ideas"].as_array().unwrap();

    assert_eq!(ideas.len(), 5);
    assert_eq!(ideas[0]["title"], "A Single Idea");
    assert_eq!(ideas[1]["title"], "Top 10 origami Tips for Beginners");
}

#[tokio::test]
async fn falls_back_when_model_output_is_not_json() {
    let app =
        TestApp::spawn(MockCompletionProvider::respond_with("Sure! Here are five ideas:")).await;

    let response = app
        .post_json("/generate-ideas", &json!({"topic": "knitting"}))
        .await;
    assert!(response.status().is_success());

    let body: Value = response.json().await.unwrap();
    let ideas = body["ideas"].as_array().unwrap();
    assert_eq!(ideas.len(), 5);
    assert_eq!(ideas[0]["title"], "Ultimate Guide to knitting");
}

#[tokio::test]
async fn falls_back_when_provider_fails() {
    let app = TestApp::spawn(MockCompletionProvider::failing()).await;

    let response = app
        .post_json("/generate-ideas", &json!({"topic": "knitting"}))
        .await;
    assert!(response.status().is_success());

    let body: Value = response.json().await.unwrap();
    let ideas = body["ideas"].as_array().unwrap();
    assert_eq!(ideas.len(), 5);
    assert_eq!(ideas[0]["title"], "Ultimate Guide to knitting");
    assert!(ideas.iter().all(|i| i["topic"] == "knitting"));
}

#[tokio::test]
async fn rejects_missing_topic_without_calling_provider() {
    let app = TestApp::spawn(MockCompletionProvider::failing()).await;

    let response = app.post_json("/generate-ideas", &json!({})).await;
    assert_eq!(response.status().as_u16(), 400);

    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("Topic is required"));

    assert_eq!(app.provider.calls(), 0);
}

#[tokio::test]
async fn rejects_whitespace_only_topic() {
    let app = TestApp::spawn(MockCompletionProvider::failing()).await;

    let response = app
        .post_json("/generate-ideas", &json!({"topic": "   "}))
        .await;
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(app.provider.calls(), 0);
}
