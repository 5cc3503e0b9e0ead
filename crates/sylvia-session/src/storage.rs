//! Persistence boundary.
//!
//! The store manipulates in-memory state only; a [`SessionStorage`]
//! implementation carries that state across process restarts. Uploaded
//! file bytes are deliberately absent from [`PersistedState`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use sylvia_core::{Session, SessionSnapshot};

use crate::error::StoreResult;

/// The durable slice of store state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedState {
    pub session: Session,
    pub saved_sessions: Vec<SessionSnapshot>,
}

/// Host mechanism for persisting sessions across restarts
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Persist the full durable state (complete replace)
    async fn save(&self, state: &PersistedState) -> StoreResult<()>;

    /// Load the durable state, `None` on first run
    async fn load(&self) -> StoreResult<Option<PersistedState>>;
}

/// In-memory storage for development and tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    state: RwLock<Option<PersistedState>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStorage for MemoryStorage {
    async fn save(&self, state: &PersistedState) -> StoreResult<()> {
        let mut guard = self.state.write().await;
        *guard = Some(state.clone());
        Ok(())
    }

    async fn load(&self) -> StoreResult<Option<PersistedState>> {
        let guard = self.state.read().await;
        Ok(guard.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_storage_round_trips() {
        let storage = MemoryStorage::new();
        assert!(storage.load().await.unwrap().is_none());

        let state = PersistedState {
            session: Session::new(),
            saved_sessions: Vec::new(),
        };
        storage.save(&state).await.unwrap();

        let loaded = storage.load().await.unwrap().unwrap();
        assert_eq!(loaded.session.id, state.session.id);
    }
}
