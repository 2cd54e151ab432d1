//! labtrack Derived Views
//!
//! Pure functions over a project slice. Nothing here mutates or caches;
//! callers recompute whenever they need a fresh view, and every function
//! is linear in the number of projects.
//!
//! # Core Concepts
//!
//! - [`filter`]: search text + stage + priority + tag predicate
//! - [`insights`]: aggregate metrics ([`Insights`])
//! - [`suggestions`]: rule-based, priority-ranked recommendations
//! - [`timeline`]: schedule position of a single project
//! - [`format`]: human-readable durations and sizes
//!
//! Date arithmetic uses whole days against a reference `today`. The
//! `*_at` variants take it explicitly; the plain variants read the local
//! date once per call.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod config;
pub mod filter;
pub mod format;
pub mod insights;
pub mod suggestions;
pub mod timeline;

pub use config::ViewConfig;
pub use filter::{filter_projects, matches, FilterQuery};
pub use insights::{
    summarize, summarize_at, summarize_with, Insights, OverdueProject, StageBuckets, TimeMetrics,
    UpcomingDeadline,
};
pub use suggestions::{
    rank_suggestions, suggest, suggest_at, suggest_with, SuggestedAction, Suggestion,
    SuggestionKind, SuggestionPriority,
};
pub use timeline::{timeline, Timeline};

use chrono::NaiveDate;

/// Current local calendar date
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
