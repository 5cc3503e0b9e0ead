//! The step contract and its view model.
//!
//! A step is one independently rendering panel of the app. Rendering is
//! read-only over the store and infallible: validation problems arrive
//! through the [`RenderContext`] and come back out as inline warnings
//! in the view, never as errors or panics.

use serde::Serialize;

use sylvia_session::SessionStore;

/// Transient UI state handed to a render pass.
///
/// `clear_inputs` must be consumed from the store BEFORE input widgets
/// are rebuilt, so a successful submit never redisplays stale values -
/// the shell takes the flag and passes it in here.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub clear_inputs: bool,
    /// Validation warning from the action that triggered this render
    pub warning: Option<String>,
}

impl RenderContext {
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }

    pub fn with_clear_inputs(mut self, clear: bool) -> Self {
        self.clear_inputs = clear;
        self
    }
}

/// A download affordance for a resource whose upload id resolves
#[derive(Debug, Clone, Serialize)]
pub struct AttachmentView {
    pub resource_name: String,
    pub upload_id: String,
    pub file_name: String,
    pub mime: String,
}

/// Rendered panel for one step
#[derive(Debug, Clone, Serialize)]
pub struct StepView {
    pub id: String,
    pub title: String,
    /// Panel content as markdown
    pub body: String,
    /// Inline validation warning, if the triggering action failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// Cached AI suggestion for this step, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Input widgets start empty on this render
    pub clear_inputs: bool,
    /// Resolvable uploads, in resource insertion order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<AttachmentView>,
}

impl StepView {
    /// Start a view for the given step, carrying over the transient
    /// render state and the step's cached suggestion
    pub fn for_step(step: &dyn Step, store: &SessionStore, ctx: &RenderContext) -> Self {
        Self {
            id: step.id().to_string(),
            title: format!("{} {}", step.icon(), step.label()),
            body: String::new(),
            warning: ctx.warning.clone(),
            suggestion: store.suggestion(step.id()).map(str::to_string),
            clear_inputs: ctx.clear_inputs,
            attachments: Vec::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

/// One independently rendering SRL panel
pub trait Step: Send + Sync {
    /// Internal identifier ("goals", "resources", ...)
    fn id(&self) -> &'static str;
    /// Display name
    fn label(&self) -> &'static str;
    /// Icon shown in the navigation
    fn icon(&self) -> &'static str;
    /// One-sentence description for the learning path
    fn description(&self) -> &'static str;
    /// Draw the panel from the current state
    fn render(&self, store: &SessionStore, ctx: &RenderContext) -> StepView;
}
