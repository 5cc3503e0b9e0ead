//! Chat panel handlers.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::handlers::ErrorResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct MessageView {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub messages: Vec<MessageView>,
}

/// POST /api/v1/chat - one synchronous chat turn
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> impl IntoResponse {
    if req.message.trim().is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!(ErrorResponse::new(
                "Message must not be empty",
                "EMPTY_MESSAGE"
            ))),
        );
    }

    let reply = state.handle_chat(req.message.trim()).await;

    let messages = {
        let store = state.store.read().await;
        store
            .session()
            .messages
            .iter()
            .map(|m| MessageView {
                role: m.role.to_string(),
                content: m.content.clone(),
            })
            .collect()
    };

    (
        StatusCode::OK,
        Json(serde_json::json!(ChatResponse { reply, messages })),
    )
}
