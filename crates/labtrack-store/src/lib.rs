//! labtrack Ordering Store
//!
//! Owns the project list in user-controlled display order.
//!
//! # Core Concepts
//!
//! - [`ProjectStore`]: the single writer; `append`, `update`, `remove` and
//!   `reposition`, each followed by a save through the gateway
//! - [`move_item`]: stable extract-then-reinsert move used for projects and steps
//! - [`TimeSession`]: start/stop time tracker fed by a one-second tick
//! - [`SharedStore`]: mutex-guarded handle for multi-threaded hosts
//!
//! The list is never re-sorted; its order changes only through
//! `append`, `remove` and `reposition`.
//!
//! # Example
//!
//! ```rust,ignore
//! use labtrack_persist::{Gateway, MemoryBackend};
//! use labtrack_store::ProjectStore;
//! use labtrack_model::ProjectDraft;
//!
//! let mut store = ProjectStore::hydrate(Gateway::new(MemoryBackend::new()));
//! let id = store.append(ProjectDraft::new("Metagenomics"))?;
//! store.reposition(&id, 0);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod ordering;
mod session;
mod shared;
mod store;

pub use error::StoreError;
pub use ordering::move_item;
pub use session::TimeSession;
pub use shared::SharedStore;
pub use store::ProjectStore;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
