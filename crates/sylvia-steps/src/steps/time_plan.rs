//! Time-management step: the study timer and session planning.
//!
//! The timer is a displayed value only. It advances through explicit
//! preset/start/pause/reset actions dispatched by the shell - there is
//! no autonomous tick in this core.

use sylvia_session::SessionStore;

use crate::step::{RenderContext, Step, StepView};

pub struct TimePlanStep;

impl Step for TimePlanStep {
    fn id(&self) -> &'static str {
        "time_plan"
    }

    fn label(&self) -> &'static str {
        "Time Management"
    }

    fn icon(&self) -> &'static str {
        "⏱️"
    }

    fn description(&self) -> &'static str {
        "Plan and track your study time."
    }

    fn render(&self, store: &SessionStore, ctx: &RenderContext) -> StepView {
        let timer = &store.session().timer;
        let state = if timer.running { "running" } else { "paused" };
        let body = format!(
            "**Study time for this task:** `{}` ({})\n\n\
             Use the timer controls to preset a work block, start, pause, \
             or reset. Short cycles with planned breaks beat marathon \
             sessions.\n",
            timer.display(),
            state
        );

        StepView::for_step(self, store, ctx).with_body(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sylvia_session::SessionStore;

    #[test]
    fn shows_timer_display_and_state() {
        let mut store = SessionStore::new(Vec::new());
        store.timer_preset(25);
        store.timer_start();
        let view = TimePlanStep.render(&store, &RenderContext::default());
        assert!(view.body.contains("`00:25:00`"));
        assert!(view.body.contains("(running)"));
    }
}
