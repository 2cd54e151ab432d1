//! Markdown renderer

use crate::report::{description_or_placeholder, generated_label, ReportExporter, REPORT_TITLE};
use chrono::NaiveDate;
use labtrack_model::Project;
use labtrack_views::Insights;
use std::fmt;

/// Markdown report with a summary list and one section per project
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownReport;

impl ReportExporter for MarkdownReport {
    fn write_report(
        &self,
        out: &mut dyn fmt::Write,
        projects: &[Project],
        insights: &Insights,
        generated: NaiveDate,
    ) -> fmt::Result {
        writeln!(out, "# {REPORT_TITLE}")?;
        writeln!(out)?;
        writeln!(out, "_Generated: {}_", generated_label(generated))?;
        writeln!(out)?;
        writeln!(out, "## Project Summary")?;
        writeln!(out)?;
        writeln!(out, "- Total Projects: {}", insights.total_projects)?;
        writeln!(out, "- Completed: {}", insights.completed_projects)?;
        writeln!(out, "- Average Progress: {}%", insights.rounded_average_progress())?;
        writeln!(out)?;
        writeln!(out, "## Projects")?;

        for (index, project) in projects.iter().enumerate() {
            writeln!(out)?;
            writeln!(out, "### {}. {}", index + 1, project.name)?;
            writeln!(out)?;
            writeln!(out, "- Stage: {}", project.stage)?;
            writeln!(out, "- Progress: {}", project.progress)?;
            writeln!(out, "- Priority: {}", project.priority)?;
            writeln!(out, "- Description: {}", description_or_placeholder(project))?;
        }
        Ok(())
    }

    fn extension(&self) -> &'static str {
        "md"
    }

    fn name(&self) -> &'static str {
        "markdown"
    }
}
