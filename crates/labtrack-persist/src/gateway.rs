//! Typed access to the two fixed keys

use crate::backend::StorageBackend;
use crate::error::PersistError;
use crate::seed::seed_projects;
use labtrack_model::Project;

/// Key holding the serialized project list
pub const PROJECTS_KEY: &str = "bioinf-projects";

/// Key holding the display-mode flag
pub const DARK_MODE_KEY: &str = "bioinf-dark-mode";

/// Where a loaded project list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Parsed from the backend
    Stored,
    /// Nothing stored; seed data used
    Missing,
    /// Stored value unreadable or unparsable; seed data used
    Malformed,
}

/// Persistence gateway over a storage backend
#[derive(Debug, Clone)]
pub struct Gateway<B> {
    backend: B,
}

impl<B: StorageBackend> Gateway<B> {
    /// Create gateway over `backend`
    #[inline]
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Underlying backend
    #[inline]
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load the project list, falling back to seed data
    #[must_use]
    pub fn load_projects(&self) -> Vec<Project> {
        self.load_projects_with_source().0
    }

    /// Load the project list and report where it came from
    #[must_use]
    pub fn load_projects_with_source(&self) -> (Vec<Project>, LoadSource) {
        let raw = match self.backend.read(PROJECTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("no stored projects, using seed data");
                return (seed_projects(), LoadSource::Missing);
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored projects, using seed data");
                return (seed_projects(), LoadSource::Malformed);
            }
        };

        match serde_json::from_str::<Vec<Project>>(&raw) {
            Ok(projects) => {
                tracing::debug!(count = projects.len(), "loaded stored projects");
                (projects, LoadSource::Stored)
            }
            Err(e) => {
                tracing::warn!(error = %e, "stored projects unparsable, using seed data");
                (seed_projects(), LoadSource::Malformed)
            }
        }
    }

    /// Serialize and store the full project list
    pub fn save_projects(&mut self, projects: &[Project]) -> Result<(), PersistError> {
        let json = serde_json::to_string(projects)
            .map_err(|e| PersistError::serialize_error(PROJECTS_KEY, e))?;
        self.backend.write(PROJECTS_KEY, &json)
    }

    /// Load the display-mode flag (`false` when absent or invalid)
    #[must_use]
    pub fn load_dark_mode(&self) -> bool {
        match self.backend.read(DARK_MODE_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "stored display mode unparsable, using light mode");
                false
            }),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read display mode");
                false
            }
        }
    }

    /// Store the display-mode flag
    pub fn save_dark_mode(&mut self, enabled: bool) -> Result<(), PersistError> {
        let json = serde_json::to_string(&enabled)
            .map_err(|e| PersistError::serialize_error(DARK_MODE_KEY, e))?;
        self.backend.write(DARK_MODE_KEY, &json)
    }
}
