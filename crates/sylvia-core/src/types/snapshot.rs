use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::message::Message;
use crate::types::session::Session;

/// An immutable, timestamped copy of a session's conversation and
/// progress, stored for later recall.
///
/// Snapshots copy only messages and progress - resources, learning path
/// and timer stay with the live session. Loading a snapshot restores
/// exactly those two fields and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub name: String,
    pub timestamp: DateTime<Utc>,
    pub messages: Vec<Message>,
    pub progress_percent: u8,
}

impl SessionSnapshot {
    /// Capture a snapshot of the given session
    pub fn capture(name: impl Into<String>, session: &Session) -> Self {
        Self {
            name: name.into(),
            timestamp: Utc::now(),
            messages: session.messages.clone(),
            progress_percent: session.progress_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_is_independent_of_live_session() {
        let mut session = Session::new();
        session.add_message(Message::user("before"));
        session.progress_percent = 40;

        let snapshot = SessionSnapshot::capture("checkpoint", &session);

        session.add_message(Message::user("after"));
        session.progress_percent = 80;

        assert_eq!(snapshot.messages.len(), 1);
        assert_eq!(snapshot.progress_percent, 40);
    }
}
