//! Volatile blob store for uploaded resource files.
//!
//! This is the second tier of the two-tier model: the durable `Session`
//! record carries only `upload_id` references, while the bytes live
//! here for the lifetime of the process. Nothing in this store survives
//! session serialization - a restored session whose resources point
//! into an empty blob store simply loses its download affordances.

use std::collections::HashMap;

use chrono::Utc;

use sylvia_core::UploadedFile;

/// In-memory map of uploaded files keyed by generated id.
///
/// Ids have the form `<epoch-seconds>_<original-filename>`. Uniqueness
/// is only as strong as filename plus second granularity: two uploads
/// of the same filename within the same second collide, and the later
/// one wins. Acceptable here because this is not a durability-critical
/// store.
#[derive(Debug, Default)]
pub struct BlobStore {
    files: HashMap<String, UploadedFile>,
}

impl BlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a file under a freshly generated id and return the id
    pub fn store(&mut self, file: UploadedFile) -> String {
        self.store_at(Utc::now().timestamp(), file)
    }

    /// Store a file with an explicit epoch second (id generation seam)
    pub fn store_at(&mut self, epoch_seconds: i64, file: UploadedFile) -> String {
        let id = format!("{}_{}", epoch_seconds, file.name);
        self.files.insert(id.clone(), file);
        id
    }

    /// Resolve an upload id to its file record
    pub fn get(&self, upload_id: &str) -> Option<&UploadedFile> {
        self.files.get(upload_id)
    }

    /// Whether an upload id resolves
    pub fn contains(&self, upload_id: &str) -> bool {
        self.files.contains_key(upload_id)
    }

    /// Number of stored files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> UploadedFile {
        UploadedFile::new(name, "text/plain", b"contents".to_vec())
    }

    #[test]
    fn ids_embed_second_and_filename() {
        let mut blobs = BlobStore::new();
        let id = blobs.store_at(1_700_000_000, file("notes.txt"));
        assert_eq!(id, "1700000000_notes.txt");
        assert_eq!(blobs.get(&id).unwrap().mime, "text/plain");
    }

    #[test]
    fn distinct_seconds_give_distinct_ids() {
        let mut blobs = BlobStore::new();
        let a = blobs.store_at(100, file("notes.txt"));
        let b = blobs.store_at(101, file("notes.txt"));
        assert_ne!(a, b);
        assert_eq!(blobs.len(), 2);
    }

    #[test]
    fn same_second_same_filename_collides() {
        // Known weakness of the id scheme: the later upload wins.
        let mut blobs = BlobStore::new();
        let a = blobs.store_at(100, UploadedFile::new("notes.txt", "text/plain", b"one".to_vec()));
        let b = blobs.store_at(100, UploadedFile::new("notes.txt", "text/plain", b"two".to_vec()));
        assert_eq!(a, b);
        assert_eq!(blobs.len(), 1);
        assert_eq!(blobs.get(&a).unwrap().data, b"two");
    }

    #[test]
    fn unknown_id_does_not_resolve() {
        let blobs = BlobStore::new();
        assert!(blobs.get("123_missing.bin").is_none());
        assert!(!blobs.contains("123_missing.bin"));
    }
}
