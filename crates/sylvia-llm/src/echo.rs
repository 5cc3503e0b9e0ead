//! Echo fallback provider, used when the real gateway is not
//! configured (no API key). Keeps the rest of the app usable.

use async_trait::async_trait;

use sylvia_core::Session;

use crate::error::Result;
use crate::provider::SuggestionProvider;

/// Provider that echoes the student's message back
#[derive(Debug, Default)]
pub struct EchoProvider;

impl EchoProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SuggestionProvider for EchoProvider {
    fn provider_id(&self) -> &str {
        "echo"
    }

    async fn suggest(&self, _module_id: &str, prompt: &str, _session: &Session) -> Result<String> {
        Ok(format!("AI is not configured right now. Echo: {}", prompt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn echo_returns_the_prompt() {
        let provider = EchoProvider::new();
        let session = Session::new();
        let reply = provider.suggest("goals", "hello", &session).await.unwrap();
        assert!(reply.ends_with("Echo: hello"));
    }
}
