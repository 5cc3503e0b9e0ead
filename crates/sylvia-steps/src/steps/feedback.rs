//! Feedback step.

use sylvia_session::SessionStore;

use crate::step::{RenderContext, Step, StepView};

pub struct FeedbackStep;

impl Step for FeedbackStep {
    fn id(&self) -> &'static str {
        "feedback"
    }

    fn label(&self) -> &'static str {
        "Feedback"
    }

    fn icon(&self) -> &'static str {
        "✅"
    }

    fn description(&self) -> &'static str {
        "Review your learning habits overall."
    }

    fn render(&self, store: &SessionStore, ctx: &RenderContext) -> StepView {
        let session = store.session();
        let completed = session
            .learning_path
            .iter()
            .filter(|e| e.completed)
            .count();
        let body = format!(
            "How is this way of working going for you?\n\n\
             You have visited {} of {} steps ({}% of the learning path) and \
             exchanged {} chat messages this session.\n",
            completed,
            session.learning_path.len(),
            session.progress_percent,
            session.messages.len()
        );

        StepView::for_step(self, store, ctx).with_body(body)
    }
}
