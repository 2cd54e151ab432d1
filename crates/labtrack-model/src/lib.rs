//! labtrack Model
//!
//! The project record schema shared by every other crate.
//!
//! # Core Concepts
//!
//! - [`Project`]: a tracked research project, owned by the ordering store
//! - [`Stage`] / [`Priority`]: fixed workflow and urgency enumerations
//! - [`Step`]: categorized unit of work in the completed or next-steps list
//! - [`Attachment`]: file metadata (no binary content)
//! - [`ProjectDraft`] / [`ProjectPatch`]: create and edit inputs
//! - [`StepTemplate`]: built-in bioinformatics step templates
//!
//! Legacy persisted data is normalized while deserializing: bare-string
//! steps become `{text, category: Other}`, empty date strings become
//! absent dates and out-of-range progress is clamped.
//!
//! # Example
//!
//! ```rust,ignore
//! use labtrack_model::{ProjectDraft, ProjectId, Stage};
//!
//! let draft = ProjectDraft::new("RNA-seq Analysis").with_stage(Stage::Analysis);
//! let project = draft.into_project(ProjectId::new())?;
//! assert_eq!(project.stage, Stage::Analysis);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod attachment;
mod error;
mod id;
mod project;
mod serde_util;
mod step;
mod template;

pub use attachment::Attachment;
pub use error::ModelError;
pub use id::{AttachmentId, ProjectId};
pub use project::{Priority, Progress, Project, ProjectDraft, ProjectPatch, Stage};
pub use step::{Step, StepCategory, StepList};
pub use template::{step_suggestions, template, StepTemplate, COMMON_STEPS, TEMPLATES};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
