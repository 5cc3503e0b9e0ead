//! # Session Store
//!
//! Owns the live SRL session, the saved-snapshot history, the volatile
//! blob store, and the transient per-step scratch state (cached AI
//! replies, the clear-inputs flag). Every user action the shell
//! dispatches lands here as one typed operation; steps only read.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use sylvia_core::{
    export_transcript, LearningPathEntry, Message, Resource, Session, SessionSnapshot,
    UploadedFile,
};

use crate::blob::BlobStore;
use crate::error::{StoreError, StoreResult};
use crate::storage::PersistedState;

/// The one mutable home of application state.
pub struct SessionStore {
    session: Session,
    saved: Vec<SessionSnapshot>,
    blobs: BlobStore,
    /// Last AI reply per step id; new calls overwrite
    ai_replies: HashMap<String, String>,
    /// Raised after a successful resource add; consumed at the start of
    /// the next render pass, before input widgets are rebuilt
    clear_inputs: bool,
    /// Most recent snapshots shown in the listing
    max_saved_shown: usize,
}

impl SessionStore {
    /// Create a store with a fresh session seeded with the given
    /// learning path
    pub fn new(learning_path: Vec<LearningPathEntry>) -> Self {
        Self {
            session: Session::new().with_learning_path(learning_path),
            saved: Vec::new(),
            blobs: BlobStore::new(),
            ai_replies: HashMap::new(),
            clear_inputs: false,
            max_saved_shown: 10,
        }
    }

    /// Prefill the session with demo content so the UI has data on
    /// first load
    pub fn with_demo_content(mut self) -> Self {
        self.session.task_name = "Research paper on climate change".to_string();
        self.session.task_type = "Research paper".to_string();
        self.session.goal_type = "mastery".to_string();
        self.session.goal_description = "Deeply understand the mechanisms of climate change \
             and their environmental impacts."
            .to_string();
        self.session.chosen_strategies = vec![
            "Elaborative interrogation (ask why/how questions)".to_string(),
            "Self-explanation (teach it aloud or in writing)".to_string(),
            "Concept mapping / diagrams".to_string(),
        ];
        self
    }

    /// Cap the snapshot listing
    pub fn with_max_saved_shown(mut self, max: usize) -> Self {
        self.max_saved_shown = max;
        self
    }

    /// Read access to the live session
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Read access to the blob store
    pub fn blobs(&self) -> &BlobStore {
        &self.blobs
    }

    // ---- navigation and progress -------------------------------------

    /// Handle a navigation click: switch the current step, mark the
    /// matching learning-path entry completed, recompute progress
    pub fn navigate(&mut self, step_id: &str) {
        self.session.current_step = step_id.to_string();
        self.session.complete_step(step_id);
        debug!(
            "Navigated to '{}', progress {}%",
            step_id, self.session.progress_percent
        );
    }

    // ---- chat ---------------------------------------------------------

    /// Append a user message
    pub fn push_user_message(&mut self, text: impl Into<String>) {
        self.session.add_message(Message::user(text));
    }

    /// Append an assistant message
    pub fn push_assistant_message(&mut self, text: impl Into<String>) {
        self.session.add_message(Message::assistant(text));
    }

    // ---- per-step AI scratch map --------------------------------------

    /// Cache the latest gateway reply for a step (one slot per step)
    pub fn cache_suggestion(&mut self, step_id: &str, reply: impl Into<String>) {
        self.ai_replies.insert(step_id.to_string(), reply.into());
    }

    /// The cached reply for a step, if any
    pub fn suggestion(&self, step_id: &str) -> Option<&str> {
        self.ai_replies.get(step_id).map(String::as_str)
    }

    // ---- resources ----------------------------------------------------

    /// Add a resource.
    ///
    /// The name is required after trimming; an empty name is a
    /// validation error and performs no mutation. With an attached
    /// file the bytes go into the blob store and the resource carries
    /// the generated upload id. Success raises the clear-inputs flag.
    pub fn add_resource(
        &mut self,
        name: &str,
        kind: &str,
        link: Option<&str>,
        upload: Option<UploadedFile>,
    ) -> StoreResult<()> {
        let name = name.trim();
        if name.is_empty() {
            warn!("Rejected resource with empty name");
            return Err(StoreError::validation(
                "Give the resource at least a short name.",
            ));
        }

        let link = link
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string);

        let mut resource = Resource::new(name, kind.trim(), link);
        if let Some(file) = upload {
            let upload_id = self.blobs.store(file);
            resource = resource.with_upload(upload_id);
        }

        self.session.add_resource(resource);
        self.clear_inputs = true;
        info!("Added resource '{}'", name);
        Ok(())
    }

    /// Consume the clear-inputs flag (checked before inputs are rebuilt)
    pub fn take_clear_inputs(&mut self) -> bool {
        std::mem::take(&mut self.clear_inputs)
    }

    /// Resolve a resource's upload id to the original file, when the
    /// blob still exists
    pub fn download(&self, upload_id: &str) -> Option<&UploadedFile> {
        self.blobs.get(upload_id)
    }

    // ---- step field edits ---------------------------------------------

    pub fn set_task(&mut self, name: &str, kind: &str) {
        self.session.task_name = name.trim().to_string();
        self.session.task_type = kind.trim().to_string();
        self.session.touch();
    }

    pub fn set_goal(&mut self, goal_type: &str, description: &str) {
        self.session.goal_type = goal_type.trim().to_string();
        self.session.goal_description = description.trim().to_string();
        self.session.touch();
    }

    pub fn set_strategies(&mut self, strategies: Vec<String>) {
        self.session.chosen_strategies = strategies;
        self.session.touch();
    }

    /// Update one reflection slot by name
    pub fn set_reflection(&mut self, slot: &str, text: &str) -> StoreResult<()> {
        let text = text.trim().to_string();
        match slot {
            "goal" => self.session.reflections.goal = text,
            "strategies" => self.session.reflections.strategies = text,
            "time" => self.session.reflections.time = text,
            "growth" => self.session.reflections.growth = text,
            other => {
                return Err(StoreError::validation(format!(
                    "Unknown reflection slot: {}",
                    other
                )))
            }
        }
        self.session.touch();
        Ok(())
    }

    // ---- timer --------------------------------------------------------

    pub fn timer_preset(&mut self, minutes: u32) {
        self.session.timer.preset(minutes);
        self.session.touch();
    }

    pub fn timer_start(&mut self) {
        self.session.timer.running = true;
        self.session.touch();
    }

    pub fn timer_pause(&mut self) {
        self.session.timer.running = false;
        self.session.touch();
    }

    pub fn timer_reset(&mut self) {
        self.session.timer.reset();
        self.session.touch();
    }

    // ---- session lifecycle --------------------------------------------

    /// Empty messages, zero progress, mark the whole learning path
    /// incomplete. Snapshots are untouched.
    pub fn clear_session(&mut self) {
        self.session.clear();
        info!("Cleared session {}", self.session.id);
    }

    /// Append a snapshot of the live session and return a copy of it.
    /// The live session is untouched.
    pub fn save_snapshot(&mut self, name: Option<String>) -> SessionSnapshot {
        let name = name.unwrap_or_else(|| {
            format!(
                "Session {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S")
            )
        });
        let snapshot = SessionSnapshot::capture(name, &self.session);
        info!("Saved snapshot '{}'", snapshot.name);
        self.saved.push(snapshot.clone());
        snapshot
    }

    /// Start over: auto-save a snapshot when the conversation is
    /// non-empty, then clear and assign a fresh session id. Returns
    /// whether a snapshot was taken.
    pub fn new_session(&mut self) -> bool {
        let snapshotted = if self.session.messages.is_empty() {
            false
        } else {
            self.save_snapshot(None);
            true
        };
        self.session.clear();
        self.session.id = uuid::Uuid::new_v4().to_string();
        info!("Started new session {}", self.session.id);
        snapshotted
    }

    /// Render the conversation as a plain-text transcript
    pub fn export(&self) -> String {
        export_transcript(&self.session.messages)
    }

    /// Replace live messages and progress with a snapshot's copies.
    /// Resources, learning path, and timer are untouched.
    pub fn load_snapshot(&mut self, index: usize) -> StoreResult<()> {
        let snapshot = self
            .saved
            .get(index)
            .ok_or(StoreError::SnapshotNotFound { index })?;
        self.session.messages = snapshot.messages.clone();
        self.session.progress_percent = snapshot.progress_percent;
        self.session.touch();
        info!("Loaded snapshot '{}'", snapshot.name);
        Ok(())
    }

    /// Full snapshot history, oldest first
    pub fn saved_snapshots(&self) -> &[SessionSnapshot] {
        &self.saved
    }

    /// The most recent snapshots, capped for display
    pub fn recent_snapshots(&self) -> &[SessionSnapshot] {
        let start = self.saved.len().saturating_sub(self.max_saved_shown);
        &self.saved[start..]
    }

    /// Index into the full history of the i-th visible snapshot
    pub fn visible_snapshot_index(&self, visible: usize) -> usize {
        self.saved.len().saturating_sub(self.max_saved_shown) + visible
    }

    // ---- persistence boundary -----------------------------------------

    /// Copy of the durable state (blobs excluded by design)
    pub fn persisted(&self) -> PersistedState {
        PersistedState {
            session: self.session.clone(),
            saved_sessions: self.saved.clone(),
        }
    }

    /// Restore durable state from the persistence boundary. Upload ids
    /// inside restored resources will not resolve - the blob store is
    /// process-scoped - and the resource panel degrades accordingly.
    pub fn restore(&mut self, state: PersistedState) {
        self.session = state.session;
        self.saved = state.saved_sessions;
        self.ai_replies.clear();
        self.clear_inputs = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> Vec<LearningPathEntry> {
        vec![
            LearningPathEntry::new("goals", "Goals", "Set your goals"),
            LearningPathEntry::new("resources", "Resources", "Collect resources"),
            LearningPathEntry::new("reflection", "Reflect", "Look back"),
        ]
    }

    fn store() -> SessionStore {
        SessionStore::new(path())
    }

    #[test]
    fn empty_resource_name_never_mutates() {
        let mut store = store();
        for name in ["", "   ", "\t\n"] {
            let err = store.add_resource(name, "Textbook / reading", None, None);
            assert!(matches!(err, Err(StoreError::Validation(_))));
        }
        assert!(store.session().resources.is_empty());
        assert!(!store.take_clear_inputs());
    }

    #[test]
    fn add_appends_in_order_with_upload_iff_attached() {
        let mut store = store();
        store
            .add_resource("Chapter 5", "Textbook / reading", None, None)
            .unwrap();
        store
            .add_resource(
                "Lecture slides",
                "Tool / software",
                Some("https://example.com/slides"),
                Some(UploadedFile::new(
                    "slides.pdf",
                    "application/pdf",
                    b"%PDF".to_vec(),
                )),
            )
            .unwrap();

        let resources = &store.session().resources;
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].name, "Chapter 5");
        assert!(resources[0].upload_id.is_none());
        assert!(resources[1].upload_id.is_some());

        let upload_id = resources[1].upload_id.clone().unwrap();
        let file = store.download(&upload_id).unwrap();
        assert_eq!(file.name, "slides.pdf");
        assert_eq!(file.data, b"%PDF");
    }

    #[test]
    fn successful_add_raises_clear_inputs_once() {
        let mut store = store();
        store.add_resource("Notes", "", None, None).unwrap();
        assert!(store.take_clear_inputs());
        assert!(!store.take_clear_inputs());
    }

    #[test]
    fn name_and_link_are_trimmed() {
        let mut store = store();
        store
            .add_resource("  Chapter 5  ", " Textbook ", Some("   "), None)
            .unwrap();
        let resource = &store.session().resources[0];
        assert_eq!(resource.name, "Chapter 5");
        assert_eq!(resource.kind, "Textbook");
        assert!(resource.link.is_none());
    }

    #[test]
    fn navigation_is_idempotent_for_progress() {
        let mut store = store();
        store.navigate("goals");
        let progress = store.session().progress_percent;
        assert_eq!(progress, 33);
        store.navigate("goals");
        assert_eq!(store.session().progress_percent, progress);
    }

    #[test]
    fn navigation_to_unknown_step_changes_no_progress() {
        let mut store = store();
        store.navigate("not-a-step");
        assert_eq!(store.session().current_step, "not-a-step");
        assert_eq!(store.session().progress_percent, 0);
    }

    #[test]
    fn new_session_snapshots_only_nonempty_conversations() {
        let mut store = store();
        assert!(!store.new_session());
        assert_eq!(store.saved_snapshots().len(), 0);

        store.push_user_message("hello");
        let old_id = store.session().id.clone();
        assert!(store.new_session());
        assert_eq!(store.saved_snapshots().len(), 1);
        assert_eq!(store.saved_snapshots()[0].messages.len(), 1);
        assert!(store.session().messages.is_empty());
        assert_ne!(store.session().id, old_id);
    }

    #[test]
    fn save_does_not_clear_the_live_session() {
        let mut store = store();
        store.push_user_message("keep me");
        store.save_snapshot(Some("named".to_string()));
        assert_eq!(store.session().messages.len(), 1);
        assert_eq!(store.saved_snapshots()[0].name, "named");
    }

    #[test]
    fn load_replaces_messages_and_progress_exactly() {
        let mut store = store();
        store.push_user_message("first");
        store.navigate("goals");
        store.save_snapshot(None);

        store.push_user_message("second");
        store.navigate("resources");
        store
            .add_resource("Kept across load", "", None, None)
            .unwrap();

        store.load_snapshot(0).unwrap();

        let session = store.session();
        assert_eq!(session.messages.len(), 1);
        assert_eq!(session.messages[0].content, "first");
        assert_eq!(session.progress_percent, 33);
        // Untouched by load: resources and learning path
        assert_eq!(session.resources.len(), 1);
        assert!(session
            .learning_path
            .iter()
            .any(|e| e.id == "resources" && e.completed));
    }

    #[test]
    fn load_out_of_range_is_an_error() {
        let mut store = store();
        assert!(matches!(
            store.load_snapshot(3),
            Err(StoreError::SnapshotNotFound { index: 3 })
        ));
    }

    #[test]
    fn clear_keeps_snapshots() {
        let mut store = store();
        store.push_user_message("hello");
        store.save_snapshot(None);
        store.clear_session();
        assert!(store.session().messages.is_empty());
        assert_eq!(store.saved_snapshots().len(), 1);
    }

    #[test]
    fn recent_snapshots_are_capped() {
        let mut store = SessionStore::new(path()).with_max_saved_shown(3);
        for i in 0..5 {
            store.push_user_message(format!("m{i}"));
            store.save_snapshot(Some(format!("s{i}")));
        }
        let recent = store.recent_snapshots();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].name, "s2");
        assert_eq!(store.visible_snapshot_index(0), 2);
        // The full history is never truncated
        assert_eq!(store.saved_snapshots().len(), 5);
    }

    #[test]
    fn suggestions_overwrite_per_step() {
        let mut store = store();
        store.cache_suggestion("resources", "first idea");
        store.cache_suggestion("resources", "second idea");
        store.cache_suggestion("goals", "goal idea");
        assert_eq!(store.suggestion("resources"), Some("second idea"));
        assert_eq!(store.suggestion("goals"), Some("goal idea"));
        assert_eq!(store.suggestion("reflection"), None);
    }

    #[test]
    fn restore_drops_transient_state() {
        let mut store = store();
        store.push_user_message("hello");
        store.cache_suggestion("goals", "stale");
        store.add_resource("Notes", "", None, None).unwrap();

        let state = store.persisted();
        let mut restored = SessionStore::new(Vec::new());
        restored.restore(state);

        assert_eq!(restored.session().messages.len(), 1);
        assert_eq!(restored.session().resources.len(), 1);
        assert_eq!(restored.suggestion("goals"), None);
        assert!(!restored.take_clear_inputs());
        // Blobs are process-scoped and gone after a restore
        assert!(restored.blobs().is_empty());
    }

    #[test]
    fn timer_is_driven_by_explicit_actions_only() {
        let mut store = store();
        store.timer_preset(25);
        store.timer_start();
        assert!(store.session().timer.running);
        assert_eq!(store.session().timer.display(), "00:25:00");
        store.timer_pause();
        assert!(!store.session().timer.running);
        store.timer_reset();
        assert_eq!(store.session().timer.display(), "00:00:00");
    }

    #[test]
    fn unknown_reflection_slot_is_rejected() {
        let mut store = store();
        assert!(store.set_reflection("growth", "I learned a lot").is_ok());
        assert!(store.set_reflection("mood", "n/a").is_err());
        assert_eq!(store.session().reflections.growth, "I learned a lot");
    }
}
