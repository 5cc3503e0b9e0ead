//! Learning-strategies step.

use sylvia_session::SessionStore;

use crate::step::{RenderContext, Step, StepView};

pub struct StrategiesStep;

impl Step for StrategiesStep {
    fn id(&self) -> &'static str {
        "strategies"
    }

    fn label(&self) -> &'static str {
        "Strategies"
    }

    fn icon(&self) -> &'static str {
        "🧠"
    }

    fn description(&self) -> &'static str {
        "Choose research-aligned learning strategies."
    }

    fn render(&self, store: &SessionStore, ctx: &RenderContext) -> StepView {
        let session = store.session();
        let mut body =
            String::from("Pick a small set of strategies and plan how to use them.\n");

        if session.chosen_strategies.is_empty() {
            body.push_str("\nNo strategies selected yet.\n");
        } else {
            body.push_str("\n##### Your strategies\n");
            for strategy in &session.chosen_strategies {
                body.push_str(&format!("- {}\n", strategy));
            }
        }

        StepView::for_step(self, store, ctx).with_body(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sylvia_session::SessionStore;

    #[test]
    fn lists_chosen_strategies() {
        let mut store = SessionStore::new(Vec::new());
        store.set_strategies(vec![
            "Concept mapping / diagrams".to_string(),
            "Practice testing".to_string(),
        ]);
        let view = StrategiesStep.render(&store, &RenderContext::default());
        assert!(view.body.contains("- Concept mapping / diagrams"));
        assert!(view.body.contains("- Practice testing"));
    }
}
