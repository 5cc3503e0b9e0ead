//! Step navigation and rendering handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use sylvia_core::LearningPathEntry;
use sylvia_llm::LlmError;

use crate::handlers::ErrorResponse;
use crate::state::AppState;

/// GET /api/v1/steps - navigation items in registration order
pub async fn list_steps_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.registry.nav_items())
}

/// GET /api/v1/steps/:step_id - render one panel
pub async fn get_step_handler(
    State(state): State<AppState>,
    Path(step_id): Path<String>,
) -> impl IntoResponse {
    Json(state.render_step(&step_id).await)
}

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub step_id: String,
    pub suggestion: String,
}

/// POST /api/v1/steps/:step_id/suggest - ask the gateway for a
/// step-contextual suggestion and cache it under the step id
pub async fn suggest_handler(
    State(state): State<AppState>,
    Path(step_id): Path<String>,
    Json(req): Json<SuggestRequest>,
) -> impl IntoResponse {
    let message = req.message.trim();
    if message.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!(ErrorResponse::new(
                "Describe what you need before asking for suggestions",
                "EMPTY_MESSAGE"
            ))),
        );
    }

    match state.handle_suggest(&step_id, message).await {
        Ok(suggestion) => (
            StatusCode::OK,
            Json(serde_json::json!(SuggestResponse {
                step_id,
                suggestion,
            })),
        ),
        Err(e) => {
            tracing::error!("Suggestion request failed: {}", e);
            let status = match e {
                LlmError::Auth(_) => StatusCode::BAD_GATEWAY,
                LlmError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
                _ => StatusCode::BAD_GATEWAY,
            };
            (
                status,
                Json(serde_json::json!(ErrorResponse::new(
                    e.to_string(),
                    "GATEWAY_ERROR"
                ))),
            )
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub step_id: String,
}

#[derive(Debug, Serialize)]
pub struct NavigateResponse {
    pub current_step: String,
    pub progress_percent: u8,
    pub learning_path: Vec<LearningPathEntry>,
}

/// POST /api/v1/navigate - switch the current step and update the
/// learning path
pub async fn navigate_handler(
    State(state): State<AppState>,
    Json(req): Json<NavigateRequest>,
) -> impl IntoResponse {
    state.handle_navigate(&req.step_id).await;
    state.persist().await;

    let store = state.store.read().await;
    let session = store.session();
    Json(NavigateResponse {
        current_step: session.current_step.clone(),
        progress_percent: session.progress_percent,
        learning_path: session.learning_path.clone(),
    })
}
