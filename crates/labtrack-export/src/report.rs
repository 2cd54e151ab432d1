//! Exporter trait and format selection

use crate::error::ExportError;
use crate::markdown::MarkdownReport;
use crate::text::PlainTextReport;
use chrono::NaiveDate;
use labtrack_model::Project;
use labtrack_views::Insights;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Report heading shared by all renderers
pub const REPORT_TITLE: &str = "Bioinformatics Project Report";

/// Report renderer
///
/// Renderers write a title, the generation date, a summary (total,
/// completed, rounded average progress) and one block per project in list
/// order.
pub trait ReportExporter: Send + Sync + fmt::Debug {
    /// Write the report into `out`
    ///
    /// # Errors
    /// Propagates formatter failures.
    fn write_report(
        &self,
        out: &mut dyn fmt::Write,
        projects: &[Project],
        insights: &Insights,
        generated: NaiveDate,
    ) -> fmt::Result;

    /// File extension without the dot
    fn extension(&self) -> &'static str;

    /// Renderer name
    fn name(&self) -> &'static str;

    /// Render the report into a string
    ///
    /// # Errors
    /// Returns [`ExportError::Render`] if formatting fails.
    fn render(
        &self,
        projects: &[Project],
        insights: &Insights,
        generated: NaiveDate,
    ) -> Result<String, ExportError> {
        let mut out = String::new();
        self.write_report(&mut out, projects, insights, generated)?;
        Ok(out)
    }
}

/// `June 15, 2024`
pub(crate) fn generated_label(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

/// Description or the placeholder used for empty ones
pub(crate) fn description_or_placeholder(project: &Project) -> &str {
    if project.description.trim().is_empty() {
        "No description"
    } else {
        &project.description
    }
}

/// Built-in report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Markdown document
    #[default]
    Markdown,
    /// Plain text
    Text,
}

impl ReportFormat {
    /// Renderer for this format
    #[must_use]
    pub fn exporter(self) -> Box<dyn ReportExporter> {
        match self {
            ReportFormat::Markdown => Box::new(MarkdownReport),
            ReportFormat::Text => Box::new(PlainTextReport),
        }
    }

    /// Default output file name
    #[must_use]
    pub fn file_name(self) -> String {
        format!("bioinformatics-projects-report.{}", self.exporter().extension())
    }
}

impl FromStr for ReportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md" | "markdown" => Ok(ReportFormat::Markdown),
            "txt" | "text" | "plain" => Ok(ReportFormat::Text),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

/// Render and write a report to `path`
///
/// # Errors
/// Returns [`ExportError`] if rendering or the file write fails.
pub fn write_report(
    path: &Path,
    exporter: &dyn ReportExporter,
    projects: &[Project],
    insights: &Insights,
    generated: NaiveDate,
) -> Result<(), ExportError> {
    let report = exporter.render(projects, insights, generated)?;
    std::fs::write(path, report).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        format = exporter.name(),
        projects = projects.len(),
        "report written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_format_names() {
        assert_eq!("md".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);
        assert_eq!("TXT".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert!(matches!(
            "pdf".parse::<ReportFormat>(),
            Err(ExportError::UnknownFormat(f)) if f == "pdf"
        ));
    }

    #[test]
    fn file_names_follow_extension() {
        assert_eq!(ReportFormat::Markdown.file_name(), "bioinformatics-projects-report.md");
        assert_eq!(ReportFormat::Text.file_name(), "bioinformatics-projects-report.txt");
    }

    #[test]
    fn generated_label_spells_month() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        assert_eq!(generated_label(date), "June 05, 2024");
    }
}
