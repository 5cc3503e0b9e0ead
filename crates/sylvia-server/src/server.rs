//! HTTP server - the shell that dispatches user actions to the steps
//! and the session store.

use std::net::SocketAddr;

use axum::{
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    chat::chat_handler,
    resources::{add_resource_handler, download_handler},
    sessions::{
        clear_session_handler, export_session_handler, get_session_handler,
        list_saved_handler, load_session_handler, new_session_handler, save_session_handler,
        timer_handler,
    },
    steps::{get_step_handler, list_steps_handler, navigate_handler, suggest_handler},
};
use crate::state::AppState;

/// Run the HTTP server until shutdown
pub async fn run_server(state: AppState) -> anyhow::Result<()> {
    let addr: SocketAddr = format!(
        "{}:{}",
        state.config.server.host, state.config.server.port
    )
    .parse()
    .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Sylvia server starting on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the router
pub fn create_router(state: AppState) -> Router {
    let cors = state.config.server.cors;

    let router = Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Left panel: navigation and steps
        .route("/api/v1/steps", get(list_steps_handler))
        .route("/api/v1/steps/:step_id", get(get_step_handler))
        .route("/api/v1/steps/:step_id/suggest", post(suggest_handler))
        .route("/api/v1/navigate", post(navigate_handler))
        // Center panel: chat
        .route("/api/v1/chat", post(chat_handler))
        // Right panel: session lifecycle and progress
        .route("/api/v1/session", get(get_session_handler))
        .route("/api/v1/session/clear", post(clear_session_handler))
        .route("/api/v1/session/save", post(save_session_handler))
        .route("/api/v1/session/new", post(new_session_handler))
        .route("/api/v1/session/export", get(export_session_handler))
        .route("/api/v1/session/saved", get(list_saved_handler))
        .route("/api/v1/session/load", post(load_session_handler))
        .route("/api/v1/timer", post(timer_handler))
        // Resources and the upload/download boundary
        .route("/api/v1/resources", post(add_resource_handler))
        .route("/api/v1/uploads/:upload_id", get(download_handler))
        // Middleware
        .layer(TraceLayer::new_for_http());

    let router = if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(state)
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use sylvia_config::Config;
    use sylvia_llm::EchoProvider;
    use sylvia_session::{MemoryStorage, SessionStore};
    use sylvia_steps::StepRegistry;

    fn app_state() -> AppState {
        let registry = StepRegistry::with_default_steps();
        let store = SessionStore::new(registry.learning_path());
        AppState::new(
            store,
            registry,
            Arc::new(EchoProvider::new()),
            Arc::new(MemoryStorage::new()),
            Config::default(),
        )
    }

    #[tokio::test]
    async fn test_router_builds() {
        let _router = create_router(app_state());
    }

    #[tokio::test]
    async fn test_router_builds_without_cors() {
        let registry = StepRegistry::with_default_steps();
        let store = SessionStore::new(registry.learning_path());
        let mut config = Config::default();
        config.server.cors = false;
        let state = AppState::new(
            store,
            registry,
            Arc::new(EchoProvider::new()),
            Arc::new(MemoryStorage::new()),
            config,
        );
        let _router = create_router(state);
    }
}
