//! # Sylvia Core
//!
//! Domain types for the Sylvia SRL (self-regulated learning) coaching
//! application: chat messages, learning resources, the learning path,
//! the study timer, the live session, and saved session snapshots.
//!
//! This crate holds pure types and the small pieces of logic attached to
//! them (progress accounting, transcript export). Everything stateful -
//! the store, the blob map, persistence - lives in `sylvia-session`.

pub mod export;
pub mod types;

pub use export::export_transcript;
pub use types::{
    LearningPathEntry, Message, Reflections, Resource, Role, Session, SessionSnapshot,
    TimerState, UploadedFile,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
