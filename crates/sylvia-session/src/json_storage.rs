//! JSON file storage implementation.
//!
//! Storage layout:
//! ```text
//! <base_path>/
//! └── state.json      # live session + snapshot history
//! ```

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::StoreResult;
use crate::storage::{PersistedState, SessionStorage};

/// JsonStorage configuration
#[derive(Debug, Clone)]
pub struct JsonStorageConfig {
    /// Storage root directory
    pub base_path: PathBuf,
}

impl JsonStorageConfig {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

/// File-backed storage, one JSON document for the whole durable state
pub struct JsonStorage {
    config: JsonStorageConfig,
}

impl JsonStorage {
    /// Create the storage, ensuring the base directory exists
    pub async fn new(config: JsonStorageConfig) -> StoreResult<Self> {
        tokio::fs::create_dir_all(&config.base_path).await?;
        info!("Session storage at {:?}", config.base_path);
        Ok(Self { config })
    }

    fn state_path(&self) -> PathBuf {
        self.config.base_path.join("state.json")
    }
}

#[async_trait]
impl SessionStorage for JsonStorage {
    async fn save(&self, state: &PersistedState) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(state)?;
        tokio::fs::write(self.state_path(), content).await?;
        debug!("Persisted session {}", state.session.id);
        Ok(())
    }

    async fn load(&self) -> StoreResult<Option<PersistedState>> {
        let path = self.state_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = tokio::fs::read_to_string(&path).await?;
        let state = serde_json::from_str(&content)?;
        Ok(Some(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sylvia_core::{Message, Session};
    use tempfile::TempDir;

    #[tokio::test]
    async fn json_storage_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(JsonStorageConfig::new(temp_dir.path()))
            .await
            .unwrap();

        assert!(storage.load().await.unwrap().is_none());

        let mut session = Session::new();
        session.add_message(Message::user("persist me"));
        let state = PersistedState {
            session,
            saved_sessions: Vec::new(),
        };
        storage.save(&state).await.unwrap();

        let loaded = storage.load().await.unwrap().unwrap();
        assert_eq!(loaded.session.messages.len(), 1);
        assert_eq!(loaded.session.messages[0].content, "persist me");
    }
}
