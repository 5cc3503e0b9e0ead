//! # Sylvia LLM
//!
//! The AI Gateway: a thin, fallible call-through to an external
//! generative-AI service. Given a module id, free-text prompt, and the
//! current session as context, it returns a text reply. Failure
//! handling is this crate's contract - callers do not retry.

pub mod echo;
pub mod error;
pub mod gemini;
pub mod prompt;
pub mod provider;

pub use echo::EchoProvider;
pub use error::{LlmError, Result};
pub use gemini::GeminiProvider;
pub use prompt::{build_prompt, build_session_context, module_hint, DEFAULT_IDENTITY};
pub use provider::{GatewayConfig, SuggestionProvider};
