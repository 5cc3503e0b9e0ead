use serde::{Deserialize, Serialize};

/// A learning resource the student plans to use for the current task.
///
/// Resources are kept in insertion order; the list is append-only from
/// the UI's point of view. `upload_id`, when present, references an
/// [`UploadedFile`] in the volatile blob store - the reference is only
/// valid for the lifetime of the process and is not guaranteed to
/// resolve after a session is serialized and restored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Short name or description, required and trimmed
    pub name: String,
    /// Free-form resource kind ("Textbook / reading", "Video / tutorial", ...)
    #[serde(default)]
    pub kind: String,
    /// Link or physical location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Key into the blob store when a file was attached
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_id: Option<String>,
}

impl Resource {
    /// Create a resource without an attached file
    pub fn new(name: impl Into<String>, kind: impl Into<String>, link: Option<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            link,
            upload_id: None,
        }
    }

    /// Attach an uploaded-file reference
    pub fn with_upload(mut self, upload_id: impl Into<String>) -> Self {
        self.upload_id = Some(upload_id.into());
        self
    }
}

/// Raw bytes of a file attached to a resource.
///
/// Lives only in the process-lifetime blob store, never inside a
/// persisted session or snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    /// Original filename
    pub name: String,
    /// MIME type as reported on upload
    pub mime: String,
    /// Payload size in bytes
    pub size: u64,
    /// File contents, byte-for-byte
    pub data: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size: data.len() as u64,
            data,
        }
    }
}
