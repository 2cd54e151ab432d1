//! Error types for persistence

use std::path::PathBuf;

/// Persistence errors
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// IO error on a backing file
    #[error("io error on {path}: {source}")]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Value could not be serialized
    #[error("serialization failed for key '{key}': {source}")]
    Serialize {
        /// Storage key
        key: String,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },
}

impl PersistError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create serialization error for key
    pub fn serialize_error(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialize {
            key: key.into(),
            source,
        }
    }
}
