use async_trait::async_trait;
use std::sync::Mutex;

use sylvia_core::{Message, Session};
use sylvia_llm::{LlmError, SuggestionProvider};

/// Mock provider for testing: canned reply, records every call
pub struct MockSuggestionProvider {
    reply: String,
    calls: Mutex<Vec<(String, String)>>,
    fail: bool,
}

impl MockSuggestionProvider {
    pub fn with_reply(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: String::new(),
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SuggestionProvider for MockSuggestionProvider {
    fn provider_id(&self) -> &str {
        "mock"
    }

    async fn suggest(
        &self,
        module_id: &str,
        prompt: &str,
        _session: &Session,
    ) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((module_id.to_string(), prompt.to_string()));
        if self.fail {
            return Err(LlmError::Api {
                status: 500,
                message: "mock failure".to_string(),
            });
        }
        Ok(self.reply.clone())
    }
}

#[tokio::test]
async fn mock_provider_records_calls() {
    let provider = MockSuggestionProvider::with_reply("Try concept mapping.");
    let mut session = Session::new();
    session.add_message(Message::user("I need resource ideas"));

    let reply = provider
        .suggest("resources", "I need resource ideas", &session)
        .await
        .unwrap();

    assert_eq!(reply, "Try concept mapping.");
    let calls = provider.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "resources");
}

#[tokio::test]
async fn mock_provider_can_fail() {
    let provider = MockSuggestionProvider::failing();
    let session = Session::new();
    let err = provider.suggest("goals", "help", &session).await.unwrap_err();
    assert!(matches!(err, LlmError::Api { status: 500, .. }));
}
