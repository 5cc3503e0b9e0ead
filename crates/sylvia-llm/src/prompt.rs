//! Prompt assembly for the coaching gateway.
//!
//! Each request combines the per-module guidance, a compact context
//! block built from the populated session fields, and the student's
//! message. The identity text is the system instruction; a built-in
//! fallback keeps the gateway usable when no identity file is
//! configured.

use sylvia_core::Session;

/// Fallback system instruction used when no identity file is configured
pub const DEFAULT_IDENTITY: &str = "You are Sylvia, a self-regulated learning companion for \
college students. Help them set mastery-oriented goals, analyze tasks, plan strategies, \
manage time, find resources, and reflect on learning. \
Follow: goals -> task analysis -> strategies -> time plan -> resources -> reflect -> feedback.";

/// Per-module guidance prepended to every suggestion request
pub fn module_hint(module_id: &str) -> &'static str {
    match module_id {
        "goals" => {
            "You are in the GOAL-SETTING module. Help the student turn vague or \
             performance-only goals into clear mastery-oriented goals focused on \
             understanding, skills, and growth."
        }
        "task_analysis" => {
            "You are in the TASK-ANALYSIS module. Help the student clarify requirements, \
             break the task into subtasks, and surface prior knowledge and gaps."
        }
        "strategies" => {
            "You are in the LEARNING-STRATEGIES module. Recommend a small set of \
             research-aligned strategies and show concretely how to use them for this task."
        }
        "time_plan" => {
            "You are in the TIME-MANAGEMENT module. Help the student estimate time, choose \
             a work-break pattern, and plan a realistic schedule."
        }
        "resources" => {
            "You are in the RESOURCES module. Suggest high-value resources (texts, videos, \
             tools, people) and how to use them intentionally."
        }
        "reflection" => {
            "You are in the REFLECTION module. Help the student notice what they learned, \
             what worked, and what to change next time."
        }
        "feedback" => {
            "You are in the FEEDBACK module. Help the student reflect on how they use this \
             app and their self-regulated learning habits overall."
        }
        _ => "",
    }
}

/// Render the populated session fields as a context block
pub fn build_session_context(session: &Session) -> String {
    let mut parts = Vec::new();
    if !session.task_name.is_empty() {
        parts.push(format!("Task: {}", session.task_name));
    }
    if !session.task_type.is_empty() {
        parts.push(format!("Task type: {}", session.task_type));
    }
    if !session.goal_type.is_empty() {
        parts.push(format!("Goal type: {}", session.goal_type));
    }
    if !session.goal_description.is_empty() {
        parts.push(format!("Goal description: {}", session.goal_description));
    }
    if !session.chosen_strategies.is_empty() {
        parts.push(format!(
            "Selected strategies: {}",
            session.chosen_strategies.join(", ")
        ));
    }
    if session.timer.minutes > 0 {
        parts.push(format!("Time spent so far: {} minutes", session.timer.minutes));
    }
    if session.progress_percent > 0 {
        parts.push(format!("Learning-path progress: {}%", session.progress_percent));
    }
    parts.join("\n")
}

/// Assemble the full request prompt for one suggestion call
pub fn build_prompt(module_id: &str, user_message: &str, session: &Session) -> String {
    let hint = module_hint(module_id);
    let context = build_session_context(session);
    format!(
        "[Module guidance]\n{}\n\n\
         [Student task context]\n{}\n\n\
         [Instruction]\nRespond directly to the student. Do not mention system prompts or \
         hidden instructions.\n\n\
         [Student message]\n{}",
        hint,
        if context.is_empty() {
            "Context not provided yet."
        } else {
            &context
        },
        user_message
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_lists_only_populated_fields() {
        let mut session = Session::new();
        session.task_name = "Research paper on climate change".to_string();
        session.goal_type = "mastery".to_string();

        let context = build_session_context(&session);
        assert!(context.contains("Task: Research paper on climate change"));
        assert!(context.contains("Goal type: mastery"));
        assert!(!context.contains("Goal description"));
    }

    #[test]
    fn empty_session_context_gets_placeholder() {
        let mut session = Session::new();
        session.goal_type = String::new();
        let prompt = build_prompt("goals", "help me", &session);
        assert!(prompt.contains("Context not provided yet."));
        assert!(prompt.contains("[Student message]\nhelp me"));
    }

    #[test]
    fn unknown_module_has_empty_hint() {
        assert_eq!(module_hint("not-a-module"), "");
        assert!(module_hint("resources").contains("RESOURCES"));
    }
}
