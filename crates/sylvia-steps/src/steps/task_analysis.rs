//! Task-analysis step.

use sylvia_session::SessionStore;

use crate::step::{RenderContext, Step, StepView};

pub struct TaskAnalysisStep;

impl Step for TaskAnalysisStep {
    fn id(&self) -> &'static str {
        "task_analysis"
    }

    fn label(&self) -> &'static str {
        "Task Analysis"
    }

    fn icon(&self) -> &'static str {
        "📋"
    }

    fn description(&self) -> &'static str {
        "Clarify requirements and break the task down."
    }

    fn render(&self, store: &SessionStore, ctx: &RenderContext) -> StepView {
        let session = store.session();
        let mut body = String::from(
            "Clarify what the task really asks for, then break it into subtasks.\n",
        );

        match (session.task_name.is_empty(), session.task_type.is_empty()) {
            (false, false) => body.push_str(&format!(
                "\n**Task:** {} ({})\n",
                session.task_name, session.task_type
            )),
            (false, true) => body.push_str(&format!("\n**Task:** {}\n", session.task_name)),
            _ => body.push_str("\nName your task first so the analysis has something to bite on.\n"),
        }

        StepView::for_step(self, store, ctx).with_body(body)
    }
}
