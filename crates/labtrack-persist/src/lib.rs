//! labtrack Persistence Gateway
//!
//! Durable key-value storage for the project list and the display-mode
//! flag. Two fixed keys are used:
//!
//! - [`PROJECTS_KEY`]: JSON array of projects
//! - [`DARK_MODE_KEY`]: JSON boolean
//!
//! Loading never fails: a missing or unparsable project list falls back to
//! the built-in [`seed_projects`], a missing or unparsable flag to `false`.
//!
//! # Example
//!
//! ```rust,ignore
//! use labtrack_persist::{FileBackend, Gateway};
//!
//! let mut gateway = Gateway::new(FileBackend::new("~/.labtrack"));
//! let projects = gateway.load_projects();
//! gateway.save_projects(&projects)?;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod backend;
mod error;
mod gateway;
mod seed;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use error::PersistError;
pub use gateway::{Gateway, LoadSource, DARK_MODE_KEY, PROJECTS_KEY};
pub use seed::seed_projects;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
