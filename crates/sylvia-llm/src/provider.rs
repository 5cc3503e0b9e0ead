use async_trait::async_trait;
use std::time::Duration;

use sylvia_core::Session;

use crate::error::Result;

/// Gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Model name
    pub model: String,
    /// API key; `None` means unauthenticated
    pub api_key: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// How many trailing messages of the conversation are sent as
    /// context with each request
    pub history_window: usize,
    /// System instruction; falls back to the built-in identity text
    pub identity: Option<String>,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            api_key: None,
            timeout: Duration::from_secs(60),
            history_window: 10,
            identity: None,
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the history window
    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window;
        self
    }

    /// Set the system instruction text
    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }
}

/// The AI Gateway contract.
///
/// `suggest` is synchronous from the caller's point of view: one call,
/// one text reply, no retry or caching at this layer.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Stable identifier of this provider
    fn provider_id(&self) -> &str;

    /// Request a contextual suggestion for the given step
    async fn suggest(&self, module_id: &str, prompt: &str, session: &Session) -> Result<String>;
}
