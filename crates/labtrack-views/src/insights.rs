//! Insights engine
//!
//! One pass over the list. Date metrics skip projects missing the dates
//! they need; averages over empty sets are zero.

use crate::config::ViewConfig;
use chrono::NaiveDate;
use labtrack_model::{Priority, Project, Stage};
use serde::Serialize;
use std::collections::BTreeMap;

/// Overdue project with its lateness
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverdueProject {
    /// The project
    #[serde(flatten)]
    pub project: Project,
    /// Whole days past the due date (at least 1)
    pub days_overdue: i64,
}

/// Project due within the upcoming window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingDeadline {
    /// The project
    #[serde(flatten)]
    pub project: Project,
    /// Whole days until due (0 means today)
    pub days_until_due: i64,
}

/// Coarse stage distribution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageBuckets {
    /// Stage is Planning
    pub planning: usize,
    /// Any stage between Planning and Complete
    pub in_progress: usize,
    /// Stage is Complete
    pub complete: usize,
}

/// Duration and effort metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeMetrics {
    /// Mean planned duration in days over projects with both dates
    pub average_project_duration: f64,
    /// Mean completed + next step count
    pub average_steps_per_project: f64,
    /// Sum of tracked seconds
    pub total_time_tracked: u64,
}

/// Aggregate summary of a project list
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    /// Number of projects
    pub total_projects: usize,
    /// Projects at 100%
    pub completed_projects: usize,
    /// High or Critical projects
    pub high_priority_projects: usize,
    /// Mean progress (0 for an empty list)
    pub average_progress: f64,
    /// Count per stage; stages with no projects are absent
    pub projects_by_stage: BTreeMap<Stage, usize>,
    /// Count per priority; priorities with no projects are absent
    pub projects_by_priority: BTreeMap<Priority, usize>,
    /// Planning / in progress / complete split
    pub stage_buckets: StageBuckets,
    /// Due within the window, in list order
    pub upcoming_deadlines: Vec<UpcomingDeadline>,
    /// Past due and incomplete, in list order
    pub overdue_projects: Vec<OverdueProject>,
    /// Duration and effort metrics
    pub time_metrics: TimeMetrics,
}

impl Insights {
    /// Average progress rounded to a whole percent
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rounded_average_progress(&self) -> u8 {
        self.average_progress.round().clamp(0.0, 100.0) as u8
    }
}

/// Summarize against the local date
#[must_use]
pub fn summarize(projects: &[Project]) -> Insights {
    summarize_at(projects, crate::today())
}

/// Summarize against `today` with default thresholds
#[must_use]
pub fn summarize_at(projects: &[Project], today: NaiveDate) -> Insights {
    summarize_with(projects, today, &ViewConfig::default())
}

/// Summarize against `today` with explicit thresholds
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize_with(projects: &[Project], today: NaiveDate, config: &ViewConfig) -> Insights {
    let mut insights = Insights {
        total_projects: projects.len(),
        ..Insights::default()
    };

    let mut progress_sum = 0u64;
    let mut step_sum = 0usize;
    let mut duration_sum = 0i64;
    let mut with_duration = 0usize;

    for project in projects {
        progress_sum += u64::from(project.progress.value());
        step_sum += project.step_count();
        insights.time_metrics.total_time_tracked += project.time_tracked;

        if project.is_complete() {
            insights.completed_projects += 1;
        }
        if project.priority.is_high() {
            insights.high_priority_projects += 1;
        }

        *insights.projects_by_stage.entry(project.stage).or_default() += 1;
        *insights.projects_by_priority.entry(project.priority).or_default() += 1;

        match project.stage {
            Stage::Planning => insights.stage_buckets.planning += 1,
            Stage::Complete => insights.stage_buckets.complete += 1,
            _ => insights.stage_buckets.in_progress += 1,
        }

        if let Some(days) = project.days_until_due(today) {
            if days < 0 && !project.is_complete() {
                insights.overdue_projects.push(OverdueProject {
                    project: project.clone(),
                    days_overdue: days.abs(),
                });
            } else if (0..=config.upcoming_window_days).contains(&days) {
                insights.upcoming_deadlines.push(UpcomingDeadline {
                    project: project.clone(),
                    days_until_due: days,
                });
            }
        }

        if let Some(duration) = project.planned_duration_days() {
            duration_sum += duration;
            with_duration += 1;
        }
    }

    if !projects.is_empty() {
        let n = projects.len() as f64;
        insights.average_progress = progress_sum as f64 / n;
        insights.time_metrics.average_steps_per_project = step_sum as f64 / n;
    }
    if with_duration > 0 {
        insights.time_metrics.average_project_duration =
            duration_sum as f64 / with_duration as f64;
    }

    insights
}
