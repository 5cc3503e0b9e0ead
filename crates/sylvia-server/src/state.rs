//! Shared application state and the action-handling layer.
//!
//! Handlers stay thin; the real work of each user action lives here so
//! it can be exercised without HTTP plumbing. One store guarded by one
//! lock: each action is a single synchronous pass over the state, which
//! is exactly the cooperative model the app assumes.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{error, info, warn};

use sylvia_config::Config;
use sylvia_core::UploadedFile;
use sylvia_llm::SuggestionProvider;
use sylvia_session::{SessionStorage, SessionStore, StoreError};
use sylvia_steps::{RenderContext, StepRegistry, StepView};

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<SessionStore>>,
    pub registry: Arc<StepRegistry>,
    pub provider: Arc<dyn SuggestionProvider>,
    pub storage: Arc<dyn SessionStorage>,
    pub config: Arc<Config>,
}

/// Outcome of a resource-add action: either the panel re-renders with
/// inputs cleared, or it re-renders with an inline warning and no
/// state change.
pub struct ResourceAddOutcome {
    pub view: StepView,
    pub added: bool,
}

impl AppState {
    pub fn new(
        store: SessionStore,
        registry: StepRegistry,
        provider: Arc<dyn SuggestionProvider>,
        storage: Arc<dyn SessionStorage>,
        config: Config,
    ) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            registry: Arc::new(registry),
            provider,
            storage,
            config: Arc::new(config),
        }
    }

    /// Write the durable state through the persistence boundary.
    /// Failures are logged, never fatal - all errors are scoped to one
    /// action pass.
    pub async fn persist(&self) {
        let state = {
            let store = self.store.read().await;
            store.persisted()
        };
        if let Err(e) = self.storage.save(&state).await {
            error!("Failed to persist session state: {}", e);
        }
    }

    /// Render a step panel. The clear-inputs flag is consumed from the
    /// store BEFORE the view is built, so a successful submit never
    /// redisplays stale input values.
    pub async fn render_step(&self, step_id: &str) -> StepView {
        let mut store = self.store.write().await;
        let clear_inputs = store.take_clear_inputs();
        let ctx = RenderContext::default().with_clear_inputs(clear_inputs);
        self.registry.get_or_first(step_id).render(&store, &ctx)
    }

    /// Chat with the assistant: append the user message, call the
    /// gateway with the current step as module context, append the
    /// reply. A gateway failure becomes an inline "model error"
    /// assistant message rather than losing the turn.
    pub async fn handle_chat(&self, text: &str) -> String {
        let (module_id, session) = {
            let mut store = self.store.write().await;
            store.push_user_message(text);
            let module_id = if store.session().current_step.is_empty() {
                "chat".to_string()
            } else {
                store.session().current_step.clone()
            };
            (module_id, store.session().clone())
        };

        let reply = match self.provider.suggest(&module_id, text, &session).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Gateway call failed: {}", e);
                format!("Model error: {}", e)
            }
        };

        {
            let mut store = self.store.write().await;
            store.push_assistant_message(reply.clone());
        }
        self.persist().await;
        reply
    }

    /// Per-step AI suggestion: call the gateway, cache the reply under
    /// the step id (one slot, new calls overwrite), return it. Gateway
    /// failures propagate - the suggestion box, unlike chat, surfaces
    /// them to the caller.
    pub async fn handle_suggest(
        &self,
        step_id: &str,
        text: &str,
    ) -> Result<String, sylvia_llm::LlmError> {
        let session = {
            let store = self.store.read().await;
            store.session().clone()
        };

        let reply = self.provider.suggest(step_id, text, &session).await?;

        {
            let mut store = self.store.write().await;
            store.cache_suggestion(step_id, reply.clone());
        }
        Ok(reply)
    }

    /// Navigation click: switch step, complete the learning-path entry,
    /// recompute progress.
    pub async fn handle_navigate(&self, step_id: &str) {
        let mut store = self.store.write().await;
        store.navigate(step_id);
        info!(
            "Current step '{}', progress {}%",
            step_id,
            store.session().progress_percent
        );
    }

    /// Resource add. A validation failure re-renders the panel with the
    /// warning inline and mutates nothing.
    pub async fn handle_add_resource(
        &self,
        name: &str,
        kind: &str,
        link: Option<&str>,
        upload: Option<UploadedFile>,
    ) -> ResourceAddOutcome {
        let mut store = self.store.write().await;
        let (added, ctx) = match store.add_resource(name, kind, link, upload) {
            Ok(()) => {
                let clear = store.take_clear_inputs();
                (true, RenderContext::default().with_clear_inputs(clear))
            }
            Err(StoreError::Validation(message)) => {
                (false, RenderContext::default().with_warning(message))
            }
            Err(e) => (false, RenderContext::default().with_warning(e.to_string())),
        };
        let view = self.registry.get_or_first("resources").render(&store, &ctx);
        drop(store);
        ResourceAddOutcome { view, added }
    }
}
