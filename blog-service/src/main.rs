use blog_service::config::BlogConfig;
use blog_service::services::metrics::init_metrics;
use blog_service::services::providers::openai::{OpenAiConfig, OpenAiProvider};
use blog_service::services::providers::CompletionProvider;
use blog_service::startup::Application;
use service_core::observability::init_tracing;
use std::sync::Arc;
use tokio::signal;

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing; OTLP export only when an endpoint is configured
    let otlp_endpoint = std::env::var("OTLP_ENDPOINT").ok();
    init_tracing("blog-service", "info", otlp_endpoint.as_deref());

    // Initialize metrics
    init_metrics();

    let config = BlogConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    if config.openai.api_key.is_empty() {
        tracing::warn!("OPENAI_API_KEY not set, all responses will use template fallbacks");
    }

    // Initialize OpenAI completion provider
    let provider: Arc<dyn CompletionProvider> = Arc::new(OpenAiProvider::new(OpenAiConfig {
        api_key: config.openai.api_key.clone(),
        model: config.openai.model.clone(),
        base_url: config.openai.base_url.clone(),
    }));

    tracing::info!(
        model = %config.openai.model,
        "Initialized OpenAI completion provider"
    );

    let app = Application::build(config, provider).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    tokio::select! {
        result = app.run_until_stopped() => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
                return Err(e);
            }
        }
        _ = shutdown_signal() => {}
    }

    Ok(())
}
