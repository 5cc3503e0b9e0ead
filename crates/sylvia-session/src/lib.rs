//! # Sylvia Session
//!
//! State management for the Sylvia SRL coaching app: the live session,
//! the saved-snapshot history, the volatile upload blob store, and the
//! persistence boundary.
//!
//! Two-tier storage model:
//!
//! - the durable [`sylvia_core::Session`] record plus snapshot history,
//!   carried across restarts by a [`SessionStorage`] backend;
//! - the process-lifetime [`BlobStore`] of uploaded file bytes, keyed
//!   by `<epoch-seconds>_<filename>` ids and never persisted.
//!
//! All mutation runs through [`SessionStore`], so the shell and the
//! steps share one explicit session-context object instead of ambient
//! globals.

pub mod blob;
pub mod error;
pub mod json_storage;
pub mod storage;
pub mod store;

pub use blob::BlobStore;
pub use error::{StoreError, StoreResult};
pub use json_storage::{JsonStorage, JsonStorageConfig};
pub use storage::{MemoryStorage, PersistedState, SessionStorage};
pub use store::SessionStore;

/// Default storage path (~/.sylvia/sessions)
pub fn default_storage_path() -> std::path::PathBuf {
    dirs::home_dir()
        .map(|p| p.join(".sylvia").join("sessions"))
        .unwrap_or_else(|| std::path::PathBuf::from("./sylvia_sessions"))
}
