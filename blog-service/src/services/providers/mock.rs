//! Mock provider implementation for testing.

use super::{CompletionProvider, GenerationParams, ProviderError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock completion provider for testing.
///
/// Answers every request with a canned response or a forced failure, and
/// counts `complete` invocations so tests can assert the upstream was
/// never called.
pub struct MockCompletionProvider {
    response: Option<String>,
    healthy: bool,
    calls: AtomicUsize,
}

impl MockCompletionProvider {
    /// Provider that answers every request with `text`.
    pub fn respond_with(text: impl Into<String>) -> Self {
        Self {
            response: Some(text.into()),
            healthy: true,
            calls: AtomicUsize::new(0),
        }
    }

    /// Provider that fails every request.
    pub fn failing() -> Self {
        Self {
            response: None,
            healthy: true,
            calls: AtomicUsize::new(0),
        }
    }

    /// Provider whose health check fails.
    pub fn unhealthy() -> Self {
        Self {
            response: None,
            healthy: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `complete` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn complete(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
        _params: &GenerationParams,
    ) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.response {
            Some(text) => Ok(text.clone()),
            None => Err(ProviderError::ApiError {
                status: 503,
                message: "Mock provider configured to fail".to_string(),
            }),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.healthy {
            Ok(())
        } else {
            Err(ProviderError::NotConfigured(
                "Mock provider marked unhealthy".to_string(),
            ))
        }
    }
}
