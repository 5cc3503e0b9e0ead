use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::message::Message;
use crate::types::resource::Resource;

/// One entry of the learning path shown in the right panel.
///
/// Entries mirror the step registry: navigating to a step marks the
/// first entry with a matching id as completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningPathEntry {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub completed: bool,
}

impl LearningPathEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            desc: desc.into(),
            completed: false,
        }
    }
}

/// Study timer state.
///
/// The timer is a displayed value only: it advances through explicit
/// preset/reset actions, never through an autonomous clock tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub minutes: u32,
    pub seconds: u32,
    pub running: bool,
}

impl TimerState {
    /// Set the timer to a preset number of minutes
    pub fn preset(&mut self, minutes: u32) {
        self.minutes = minutes;
        self.seconds = 0;
    }

    /// Stop the timer and zero it out
    pub fn reset(&mut self) {
        self.minutes = 0;
        self.seconds = 0;
        self.running = false;
    }

    /// Format as HH:MM:SS for display
    pub fn display(&self) -> String {
        format!(
            "{:02}:{:02}:{:02}",
            self.minutes / 60,
            self.minutes % 60,
            self.seconds
        )
    }
}

/// Free-text reflections, one slot per prompt
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Reflections {
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub strategies: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub growth: String,
}

/// The live SRL working state of one student.
///
/// Created on app start or "new session"; mutated by steps; archived
/// into snapshots on save/clear/new. Sessions are never hard-deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Step currently shown in the center panel
    #[serde(default)]
    pub current_step: String,

    // Task and goal fields edited by the Goals / Task Analysis steps
    #[serde(default)]
    pub task_name: String,
    #[serde(default)]
    pub task_type: String,
    #[serde(default)]
    pub goal_type: String,
    #[serde(default)]
    pub goal_description: String,
    #[serde(default)]
    pub chosen_strategies: Vec<String>,
    #[serde(default)]
    pub reflections: Reflections,

    pub messages: Vec<Message>,
    pub resources: Vec<Resource>,
    pub learning_path: Vec<LearningPathEntry>,
    /// 0–100, derived from completed learning-path entries
    pub progress_percent: u8,
    #[serde(default)]
    pub timer: TimerState,
}

impl Session {
    /// Create an empty session with a fresh id
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            current_step: String::new(),
            task_name: String::new(),
            task_type: String::new(),
            goal_type: "mastery".to_string(),
            goal_description: String::new(),
            chosen_strategies: Vec::new(),
            reflections: Reflections::default(),
            messages: Vec::new(),
            resources: Vec::new(),
            learning_path: Vec::new(),
            progress_percent: 0,
            timer: TimerState::default(),
        }
    }

    /// Seed the learning path (one entry per registered step)
    pub fn with_learning_path(mut self, entries: Vec<LearningPathEntry>) -> Self {
        self.learning_path = entries;
        self
    }

    /// Append a message and refresh `updated_at`
    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
        self.touch();
    }

    /// Append a resource at the end of the list (insertion order is
    /// display order)
    pub fn add_resource(&mut self, resource: Resource) {
        self.resources.push(resource);
        self.touch();
    }

    /// Mark the first learning-path entry matching `step_id` as
    /// completed and recompute progress. Idempotent per step.
    pub fn complete_step(&mut self, step_id: &str) {
        if let Some(entry) = self.learning_path.iter_mut().find(|e| e.id == step_id) {
            entry.completed = true;
        }
        self.recompute_progress();
        self.touch();
    }

    /// `floor(100 * completed / total)`; 0 when the path is empty
    pub fn recompute_progress(&mut self) {
        let total = self.learning_path.len();
        if total == 0 {
            self.progress_percent = 0;
            return;
        }
        let completed = self.learning_path.iter().filter(|e| e.completed).count();
        self.progress_percent = (100 * completed / total) as u8;
    }

    /// Empty the conversation, zero progress, and mark every
    /// learning-path entry incomplete. Snapshots are untouched.
    pub fn clear(&mut self) {
        self.messages.clear();
        for entry in &mut self.learning_path {
            entry.completed = false;
        }
        self.progress_percent = 0;
        self.touch();
    }

    /// Refresh the `updated_at` timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_of(n: usize) -> Vec<LearningPathEntry> {
        (0..n)
            .map(|i| LearningPathEntry::new(format!("step-{i}"), format!("Step {i}"), ""))
            .collect()
    }

    #[test]
    fn progress_is_floor_of_ratio() {
        let mut session = Session::new().with_learning_path(path_of(7));
        for completed in 0..=7usize {
            for entry in session.learning_path.iter_mut() {
                entry.completed = false;
            }
            for entry in session.learning_path.iter_mut().take(completed) {
                entry.completed = true;
            }
            session.recompute_progress();
            assert_eq!(session.progress_percent as usize, 100 * completed / 7);
        }
    }

    #[test]
    fn complete_step_is_idempotent() {
        let mut session = Session::new().with_learning_path(path_of(4));
        session.complete_step("step-1");
        let first = session.progress_percent;
        session.complete_step("step-1");
        assert_eq!(session.progress_percent, first);
        assert_eq!(first, 25);
    }

    #[test]
    fn complete_step_marks_first_match_only() {
        let mut path = path_of(2);
        path.push(LearningPathEntry::new("step-0", "Duplicate", ""));
        let mut session = Session::new().with_learning_path(path);
        session.complete_step("step-0");
        assert!(session.learning_path[0].completed);
        assert!(!session.learning_path[2].completed);
    }

    #[test]
    fn clear_resets_messages_progress_and_path() {
        let mut session = Session::new().with_learning_path(path_of(3));
        session.add_message(Message::user("hi"));
        session.complete_step("step-0");
        session.clear();
        assert!(session.messages.is_empty());
        assert_eq!(session.progress_percent, 0);
        assert!(session.learning_path.iter().all(|e| !e.completed));
    }

    #[test]
    fn empty_path_yields_zero_progress() {
        let mut session = Session::new();
        session.recompute_progress();
        assert_eq!(session.progress_percent, 0);
    }

    #[test]
    fn timer_display_formats_hhmmss() {
        let mut timer = TimerState::default();
        timer.preset(90);
        timer.seconds = 5;
        assert_eq!(timer.display(), "01:30:05");
        timer.reset();
        assert_eq!(timer.display(), "00:00:00");
        assert!(!timer.running);
    }
}
