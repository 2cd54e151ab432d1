//! Error types for the ordering store

use labtrack_model::ModelError;

/// Store errors
///
/// Unknown ids are not errors: mutations on a missing project are no-ops.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Draft or patch failed validation; state unchanged
    #[error("invalid project: {0}")]
    InvalidProject(#[from] ModelError),
}
