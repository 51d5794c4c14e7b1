//! Application startup and lifecycle management.

use crate::config::BlogConfig;
use crate::handlers;
use crate::services::providers::CompletionProvider;
use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state.
///
/// The completion provider is injected at build time rather than
/// constructed here, so tests can substitute a mock and handlers stay pure
/// functions of their input plus the provider's response.
#[derive(Clone)]
pub struct AppState {
    pub config: BlogConfig,
    pub provider: Arc<dyn CompletionProvider>,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration and provider.
    pub async fn build(
        config: BlogConfig,
        provider: Arc<dyn CompletionProvider>,
    ) -> Result<Self, AppError> {
        // Bind listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("blog-service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state: AppState { config, provider },
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);
        axum::serve(self.listener, router).await
    }
}

/// Assemble the HTTP router: the two generation endpoints, probe and
/// metrics endpoints, permissive CORS for browser callers, and request
/// tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/generate-ideas", post(handlers::ideas::generate_ideas))
        .route(
            "/generate-content",
            post(handlers::content::generate_content),
        )
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .route("/metrics", get(handlers::health::metrics_endpoint))
        .with_state(state)
        // Add tracing layer
        .layer(TraceLayer::new_for_http())
        // Add CORS layer; preflight OPTIONS requests are answered here
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]),
        )
}
