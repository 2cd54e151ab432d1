//! Testing utilities for labtrack workspace
//!
//! Shared fixtures: a fixed reference date, a terse project builder and
//! pre-loaded in-memory gateways.

#![allow(missing_docs)]
#![allow(clippy::missing_panics_doc)]

use chrono::{Duration, NaiveDate};
use labtrack_model::{
    Priority, Project, ProjectDraft, ProjectId, Stage, Step, StepCategory, StepList,
};
use labtrack_persist::{Gateway, MemoryBackend, PROJECTS_KEY};

/// Reference date used across view tests
pub fn fixed_today() -> NaiveDate {
    date(2024, 6, 15)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// `fixed_today()` shifted by `days`
pub fn days_from_today(days: i64) -> NaiveDate {
    fixed_today() + Duration::days(days)
}

/// Builder over [`ProjectDraft`] with test-friendly shortcuts
#[derive(Debug, Clone)]
pub struct TestProject {
    draft: ProjectDraft,
    id: Option<ProjectId>,
}

impl TestProject {
    pub fn named(name: &str) -> Self {
        Self {
            draft: ProjectDraft::new(name),
            id: None,
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(ProjectId::from_raw(id));
        self
    }

    pub fn progress(mut self, progress: i64) -> Self {
        self.draft = self.draft.with_progress(progress);
        self
    }

    pub fn stage(mut self, stage: Stage) -> Self {
        self.draft = self.draft.with_stage(stage);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.draft = self.draft.with_priority(priority);
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.draft = self.draft.with_description(description);
        self
    }

    /// Due `days` after [`fixed_today`] (negative for past)
    pub fn due_in(mut self, days: i64) -> Self {
        self.draft.due_date = Some(days_from_today(days));
        self
    }

    /// Start `days` after [`fixed_today`] (negative for past)
    pub fn started(mut self, days: i64) -> Self {
        self.draft.start_date = Some(days_from_today(days));
        self
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.draft = self.draft.with_tag(tag);
        self
    }

    pub fn done_step(mut self, text: &str) -> Self {
        self.draft = self
            .draft
            .with_step(StepList::Completed, Step::new(text, StepCategory::Other));
        self
    }

    pub fn next_step(mut self, text: &str) -> Self {
        self.draft = self
            .draft
            .with_step(StepList::Next, Step::new(text, StepCategory::Other));
        self
    }

    pub fn build(self) -> Project {
        self.draft
            .into_project(self.id.unwrap_or_default())
            .unwrap()
    }
}

/// Shorthand for `TestProject::named(name)`
pub fn project(name: &str) -> TestProject {
    TestProject::named(name)
}

/// Gateway whose backend already holds `projects`
pub fn memory_gateway(projects: &[Project]) -> Gateway<MemoryBackend> {
    let payload = serde_json::to_string(projects).unwrap();
    Gateway::new(MemoryBackend::new().with_entry(PROJECTS_KEY, payload))
}

/// Gateway whose backend holds an empty list
pub fn empty_gateway() -> Gateway<MemoryBackend> {
    memory_gateway(&[])
}
