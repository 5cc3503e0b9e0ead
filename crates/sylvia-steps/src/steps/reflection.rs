//! Reflection step.

use sylvia_session::SessionStore;

use crate::step::{RenderContext, Step, StepView};

pub struct ReflectionStep;

impl Step for ReflectionStep {
    fn id(&self) -> &'static str {
        "reflection"
    }

    fn label(&self) -> &'static str {
        "Reflect"
    }

    fn icon(&self) -> &'static str {
        "🤔"
    }

    fn description(&self) -> &'static str {
        "Notice what you learned and what to change."
    }

    fn render(&self, store: &SessionStore, ctx: &RenderContext) -> StepView {
        let reflections = &store.session().reflections;
        let mut body = String::from(
            "Look back on this session: what you learned, what worked, and \
             what to change next time.\n",
        );

        let slots = [
            ("Goal", &reflections.goal),
            ("Strategies", &reflections.strategies),
            ("Time", &reflections.time),
            ("Growth", &reflections.growth),
        ];
        for (label, text) in slots {
            if !text.is_empty() {
                body.push_str(&format!("\n**{}:** {}\n", label, text));
            }
        }

        StepView::for_step(self, store, ctx).with_body(body)
    }
}
