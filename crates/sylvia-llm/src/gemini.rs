//! Gemini-style HTTP provider.
//!
//! Speaks the `generateContent` REST surface: the request carries the
//! system instruction, the trailing window of conversation history, and
//! the assembled module prompt as the final user turn.

use async_trait::async_trait;
use reqwest::Client;
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use serde::{Deserialize, Serialize};

use sylvia_core::{Role, Session};

use crate::error::{LlmError, Result};
use crate::prompt::{build_prompt, DEFAULT_IDENTITY};
use crate::provider::{GatewayConfig, SuggestionProvider};

#[derive(Debug, Serialize)]
struct GenerateRequest {
    system_instruction: ContentPart,
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
struct ContentPart {
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
struct TextPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// HTTP provider for Gemini-compatible endpoints
pub struct GeminiProvider {
    config: GatewayConfig,
    http_client: reqwest_middleware::ClientWithMiddleware,
}

impl GeminiProvider {
    /// Create a provider with retrying transport
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let retry_policy = ExponentialBackoff::builder()
            .base(2)
            .build_with_max_retries(3);

        let http_client = reqwest_middleware::ClientBuilder::new(
            Client::builder()
                .timeout(config.timeout)
                .build()
                .map_err(|e| LlmError::Config(e.to_string()))?,
        )
        .with(RetryTransientMiddleware::new_with_policy(retry_policy))
        .build();

        Ok(Self {
            config,
            http_client,
        })
    }

    fn identity(&self) -> &str {
        self.config.identity.as_deref().unwrap_or(DEFAULT_IDENTITY)
    }

    /// Map the trailing history window plus the assembled prompt into
    /// request contents
    fn build_contents(&self, prompt: String, session: &Session) -> Vec<Content> {
        let window = self.config.history_window;
        let start = session.messages.len().saturating_sub(window);
        let mut contents: Vec<Content> = session.messages[start..]
            .iter()
            .filter(|m| m.role != Role::System)
            .map(|m| Content {
                role: match m.role {
                    Role::Assistant => "model".to_string(),
                    _ => "user".to_string(),
                },
                parts: vec![TextPart {
                    text: m.content.clone(),
                }],
            })
            .collect();

        contents.push(Content {
            role: "user".to_string(),
            parts: vec![TextPart { text: prompt }],
        });
        contents
    }
}

#[async_trait]
impl SuggestionProvider for GeminiProvider {
    fn provider_id(&self) -> &str {
        "gemini"
    }

    async fn suggest(&self, module_id: &str, prompt: &str, session: &Session) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| LlmError::Auth("API key is not configured".to_string()))?;

        let body = GenerateRequest {
            system_instruction: ContentPart {
                parts: vec![TextPart {
                    text: self.identity().to_string(),
                }],
            },
            contents: self.build_contents(build_prompt(module_id, prompt, session), session),
            generation_config: GenerationConfig {
                temperature: 0.8,
                max_output_tokens: 1024,
            },
        };

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        log::debug!("Requesting suggestion for module '{}'", module_id);

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            return Err(match status.as_u16() {
                401 | 403 => LlmError::Auth(error_text),
                429 => LlmError::RateLimited { retry_after: 60 },
                _ => LlmError::Api {
                    status: status.as_u16(),
                    message: error_text,
                },
            });
        }

        let data: GenerateResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        let text: String = data
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            Ok("(No response from model.)".to_string())
        } else {
            Ok(text)
        }
    }
}
