//! Filter engine
//!
//! A project matches a query when all four sub-predicates hold:
//! text, stage, priority and tags. Tag matching is OR: one shared tag is
//! enough. Filtering keeps the input order.

use labtrack_model::{Priority, Project, Stage};
use serde::{Deserialize, Serialize};

/// Search and filter criteria; empty fields match everything
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterQuery {
    /// Case-insensitive substring over name, description and step texts
    pub text: String,
    /// Required stage
    pub stage: Option<Stage>,
    /// Required priority
    pub priority: Option<Priority>,
    /// Any of these tags
    pub tags: Vec<String>,
}

impl FilterQuery {
    /// Query matching every project
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With search text
    #[inline]
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// With stage
    #[inline]
    #[must_use]
    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stage = Some(stage);
        self
    }

    /// With priority
    #[inline]
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// With one more accepted tag
    #[inline]
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// No criteria set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.stage.is_none() && self.priority.is_none() && self.tags.is_empty()
    }
}

/// Text criterion: name, description, or any step text contains `text`
#[must_use]
pub fn matches_text(project: &Project, text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    let needle = text.to_lowercase();
    let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

    contains(&project.name)
        || contains(&project.description)
        || project.step_texts().any(contains)
}

/// Stage criterion
#[inline]
#[must_use]
pub fn matches_stage(project: &Project, stage: Option<Stage>) -> bool {
    stage.map_or(true, |s| project.stage == s)
}

/// Priority criterion
#[inline]
#[must_use]
pub fn matches_priority(project: &Project, priority: Option<Priority>) -> bool {
    priority.map_or(true, |p| project.priority == p)
}

/// Tag criterion: no tags, or at least one shared tag
#[must_use]
pub fn matches_tags(project: &Project, tags: &[String]) -> bool {
    tags.is_empty() || tags.iter().any(|t| project.tags.contains(t))
}

/// Conjunction of all four criteria
#[must_use]
pub fn matches(project: &Project, query: &FilterQuery) -> bool {
    matches_text(project, &query.text)
        && matches_stage(project, query.stage)
        && matches_priority(project, query.priority)
        && matches_tags(project, &query.tags)
}

/// Projects matching `query`, in input order
#[must_use]
pub fn filter_projects<'a>(projects: &'a [Project], query: &FilterQuery) -> Vec<&'a Project> {
    projects.iter().filter(|p| matches(p, query)).collect()
}
