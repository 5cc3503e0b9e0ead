//! # Sylvia Steps
//!
//! The step registry: an ordered collection of independently rendering
//! SRL panels (tutorial, goals, task analysis, strategies, time plan,
//! resources, reflection, feedback). Steps read the session store and
//! produce a markdown view; all mutation goes through the store's typed
//! operations, dispatched by the shell.

pub mod registry;
pub mod step;
pub mod steps;

pub use registry::{NavItem, StepRegistry};
pub use step::{AttachmentView, RenderContext, Step, StepView};
pub use steps::{
    FeedbackStep, GoalsStep, ReflectionStep, ResourcesStep, StrategiesStep, TaskAnalysisStep,
    TimePlanStep, TutorialStep,
};
