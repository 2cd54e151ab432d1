//! labtrack Report Export
//!
//! Renders a project list and its [`Insights`](labtrack_views::Insights)
//! into a shareable report.
//!
//! # Core Concepts
//!
//! - [`ReportExporter`]: pluggable renderer
//! - [`MarkdownReport`] / [`PlainTextReport`]: built-in renderers
//! - [`ReportFormat`]: format selector with a default file name
//!
//! # Example
//!
//! ```rust,ignore
//! use labtrack_export::{write_report, ReportFormat};
//! use labtrack_views::summarize;
//!
//! let insights = summarize(&projects);
//! let exporter = ReportFormat::Markdown.exporter();
//! write_report(&ReportFormat::Markdown.file_name(), exporter.as_ref(), &projects, &insights, today)?;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod markdown;
mod report;
mod text;

pub use error::ExportError;
pub use markdown::MarkdownReport;
pub use report::{write_report, ReportExporter, ReportFormat, REPORT_TITLE};
pub use text::PlainTextReport;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
