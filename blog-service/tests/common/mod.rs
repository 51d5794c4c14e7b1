//! Test helper module for blog-service integration tests.

#![allow(dead_code)]

use blog_service::config::{BlogConfig, OpenAiSettings};
use blog_service::services::metrics::init_metrics;
use blog_service::services::providers::mock::MockCompletionProvider;
use blog_service::services::providers::CompletionProvider;
use blog_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use std::time::Duration;

/// Test application wrapper for integration tests.
pub struct TestApp {
    pub address: String,
    pub port: u16,
    /// Handle to the injected mock so tests can inspect call counts.
    pub provider: Arc<MockCompletionProvider>,
}

impl TestApp {
    /// Spawn the application on a random port with the given mock provider.
    pub async fn spawn(provider: MockCompletionProvider) -> Self {
        init_metrics();

        let provider = Arc::new(provider);

        let config = BlogConfig {
            common: CoreConfig { port: 0 },
            openai: OpenAiSettings {
                api_key: "test-api-key".to_string(),
                model: "gpt-4o-mini".to_string(),
                base_url: "http://127.0.0.1:9".to_string(),
            },
        };

        let app = Application::build(config, provider.clone() as Arc<dyn CompletionProvider>)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            provider,
        }
    }

    /// POST a JSON body to `path` and return the response.
    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to send request")
    }
}
