//! Goal-setting step.

use sylvia_session::SessionStore;

use crate::step::{RenderContext, Step, StepView};

pub struct GoalsStep;

impl Step for GoalsStep {
    fn id(&self) -> &'static str {
        "goals"
    }

    fn label(&self) -> &'static str {
        "Goal Setting"
    }

    fn icon(&self) -> &'static str {
        "🎯"
    }

    fn description(&self) -> &'static str {
        "Turn vague intentions into clear mastery goals."
    }

    fn render(&self, store: &SessionStore, ctx: &RenderContext) -> StepView {
        let session = store.session();
        let mut body = String::from(
            "Set a clear, mastery-oriented goal for this task.\n",
        );

        if !session.task_name.is_empty() {
            body.push_str(&format!("\n**Task:** {}\n", session.task_name));
        }
        if !session.goal_type.is_empty() {
            body.push_str(&format!("\n**Goal type:** {}\n", session.goal_type));
        }
        if !session.goal_description.is_empty() {
            body.push_str(&format!("\n**Your goal:** {}\n", session.goal_description));
        } else {
            body.push_str(
                "\nNo goal yet - describe what you want to understand or be able to do.\n",
            );
        }

        StepView::for_step(self, store, ctx).with_body(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sylvia_session::SessionStore;

    #[test]
    fn shows_goal_when_set() {
        let mut store = SessionStore::new(Vec::new());
        store.set_goal("mastery", "Understand climate feedback loops");
        let view = GoalsStep.render(&store, &RenderContext::default());
        assert!(view.body.contains("Understand climate feedback loops"));
        assert!(!view.body.contains("No goal yet"));
    }
}
