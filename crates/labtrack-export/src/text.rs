//! Plain-text renderer

use crate::report::{description_or_placeholder, generated_label, ReportExporter, REPORT_TITLE};
use chrono::NaiveDate;
use labtrack_model::Project;
use labtrack_views::Insights;
use std::fmt;

/// Plain-text report with underlined headings
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextReport;

fn heading(out: &mut dyn fmt::Write, title: &str, rule: char) -> fmt::Result {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", rule.to_string().repeat(title.chars().count()))
}

impl ReportExporter for PlainTextReport {
    fn write_report(
        &self,
        out: &mut dyn fmt::Write,
        projects: &[Project],
        insights: &Insights,
        generated: NaiveDate,
    ) -> fmt::Result {
        heading(out, REPORT_TITLE, '=')?;
        writeln!(out, "Generated: {}", generated_label(generated))?;
        writeln!(out)?;
        heading(out, "Project Summary", '-')?;
        writeln!(out, "Total Projects: {}", insights.total_projects)?;
        writeln!(out, "Completed: {}", insights.completed_projects)?;
        writeln!(out, "Average Progress: {}%", insights.rounded_average_progress())?;
        writeln!(out)?;
        heading(out, "Projects", '-')?;

        for (index, project) in projects.iter().enumerate() {
            writeln!(out, "{}. {}", index + 1, project.name)?;
            writeln!(out, "   Stage: {}", project.stage)?;
            writeln!(out, "   Progress: {}", project.progress)?;
            writeln!(out, "   Priority: {}", project.priority)?;
            writeln!(out, "   Description: {}", description_or_placeholder(project))?;
        }
        Ok(())
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn name(&self) -> &'static str {
        "text"
    }
}
