//! Attachment metadata

use crate::id::AttachmentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// File attached to a project (metadata only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Attachment identifier
    pub id: AttachmentId,
    /// File name
    pub name: String,
    /// Size in bytes
    #[serde(default)]
    pub size: u64,
    /// MIME type, empty when unknown
    #[serde(rename = "type", alias = "mimeType", default)]
    pub mime_type: String,
    /// Upload time
    #[serde(rename = "uploadDate", alias = "uploadedAt")]
    pub uploaded_at: DateTime<Utc>,
}

impl Attachment {
    /// Create attachment metadata stamped with the current time
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            id: AttachmentId::new(),
            name: name.into(),
            size,
            mime_type: mime_type.into(),
            uploaded_at: Utc::now(),
        }
    }
}
