//! Suggestion engine
//!
//! Focus rules look at one project, global rules at the whole list. Every
//! rule is independent; the result is stably ranked high to low.

use crate::config::ViewConfig;
use chrono::NaiveDate;
use labtrack_model::Project;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Suggestion urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionPriority {
    /// Rank 1
    Low,
    /// Rank 2
    Medium,
    /// Rank 3
    High,
}

impl SuggestionPriority {
    /// Sort rank, higher first
    #[inline]
    #[must_use]
    pub fn rank(&self) -> u8 {
        match self {
            SuggestionPriority::Low => 1,
            SuggestionPriority::Medium => 2,
            SuggestionPriority::High => 3,
        }
    }
}

impl fmt::Display for SuggestionPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SuggestionPriority::Low => "low",
            SuggestionPriority::Medium => "medium",
            SuggestionPriority::High => "high",
        };
        f.write_str(label)
    }
}

/// Rule family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    /// Something to do now
    Action,
    /// Close to done
    Completion,
    /// Deadline pressure
    Urgency,
    /// Missing plan
    Planning,
    /// Problem across the list
    Alert,
    /// Neglected work
    Productivity,
}

/// Action the host can bind to a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestedAction {
    /// Begin the first step
    StartProject,
    /// Finish the remaining work
    CompleteProject,
    /// Raise the project's priority
    IncreasePriority,
    /// Add next steps
    AddSteps,
    /// Review overdue projects
    ReviewOverdue,
    /// Review stagnant projects
    ReviewStagnant,
}

/// Rule-derived recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Rule family
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    /// Urgency
    pub priority: SuggestionPriority,
    /// Short heading
    pub title: String,
    /// One-line explanation
    pub description: String,
    /// Bound action
    pub action: SuggestedAction,
}

impl Suggestion {
    fn new(
        kind: SuggestionKind,
        priority: SuggestionPriority,
        title: &str,
        description: impl Into<String>,
        action: SuggestedAction,
    ) -> Self {
        Self {
            kind,
            priority,
            title: title.to_string(),
            description: description.into(),
            action,
        }
    }
}

/// Suggestions against the local date
#[must_use]
pub fn suggest(projects: &[Project], focus: Option<&Project>) -> Vec<Suggestion> {
    suggest_at(projects, focus, crate::today())
}

/// Suggestions against `today` with default thresholds
#[must_use]
pub fn suggest_at(projects: &[Project], focus: Option<&Project>, today: NaiveDate) -> Vec<Suggestion> {
    suggest_with(projects, focus, today, &ViewConfig::default())
}

/// Suggestions against `today` with explicit thresholds
#[must_use]
pub fn suggest_with(
    projects: &[Project],
    focus: Option<&Project>,
    today: NaiveDate,
    config: &ViewConfig,
) -> Vec<Suggestion> {
    let mut out = Vec::new();

    if let Some(project) = focus {
        focus_rules(project, today, config, &mut out);
    }

    let overdue = projects.iter().filter(|p| p.is_overdue(today)).count();
    if overdue > 0 {
        out.push(Suggestion::new(
            SuggestionKind::Alert,
            SuggestionPriority::High,
            "Overdue Projects",
            format!("You have {overdue} overdue {}", plural(overdue == 1, "project")),
            SuggestedAction::ReviewOverdue,
        ));
    }

    let stagnant = projects
        .iter()
        .filter(|p| {
            let v = p.progress.value();
            v > 0 && v < config.stagnant_ceiling && p.last_activity.is_none()
        })
        .count();
    if stagnant > 0 {
        out.push(Suggestion::new(
            SuggestionKind::Productivity,
            SuggestionPriority::Medium,
            "Stagnant Projects",
            format!("{stagnant} {} may need attention", plural(stagnant == 1, "project")),
            SuggestedAction::ReviewStagnant,
        ));
    }

    rank_suggestions(&mut out);
    out
}

fn focus_rules(project: &Project, today: NaiveDate, config: &ViewConfig, out: &mut Vec<Suggestion>) {
    let progress = project.progress.value();
    if progress == 0 {
        out.push(Suggestion::new(
            SuggestionKind::Action,
            SuggestionPriority::High,
            "Get Started",
            "Begin with the first step to build momentum",
            SuggestedAction::StartProject,
        ));
    } else if progress > config.almost_done_threshold && progress < 100 {
        out.push(Suggestion::new(
            SuggestionKind::Completion,
            SuggestionPriority::Medium,
            "Almost Done!",
            "You're close to completion. Push through to finish",
            SuggestedAction::CompleteProject,
        ));
    }

    if let Some(days) = project.days_until_due(today) {
        if (1..=config.deadline_alert_days).contains(&days) {
            out.push(Suggestion::new(
                SuggestionKind::Urgency,
                SuggestionPriority::High,
                "Deadline Approaching",
                format!(
                    "Only {days} {} left. Consider prioritizing this project",
                    plural(days == 1, "day")
                ),
                SuggestedAction::IncreasePriority,
            ));
        }
    }

    if project.next_steps.is_empty() {
        out.push(Suggestion::new(
            SuggestionKind::Planning,
            SuggestionPriority::Medium,
            "Plan Next Steps",
            "Add next steps to maintain project momentum",
            SuggestedAction::AddSteps,
        ));
    }
}

fn plural(singular: bool, noun: &str) -> String {
    if singular {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}

/// Stable sort by descending rank; equal ranks keep their order
pub fn rank_suggestions(suggestions: &mut [Suggestion]) {
    suggestions.sort_by_key(|s| std::cmp::Reverse(s.priority.rank()));
}
