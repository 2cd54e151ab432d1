//! Export errors

use std::path::PathBuf;
use thiserror::Error;

/// Report export failure
#[derive(Debug, Error)]
pub enum ExportError {
    /// Formatting into the output buffer failed
    #[error("failed to render report: {0}")]
    Render(#[from] std::fmt::Error),

    /// Writing the report file failed
    #[error("failed to write report to {path}: {source}")]
    Io {
        /// Target file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Unrecognized format name
    #[error("unknown report format: {0}")]
    UnknownFormat(String),
}
