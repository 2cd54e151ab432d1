//! Project record
//!
//! Defines the tracked project and its create/edit inputs:
//! - Workflow stage and priority enumerations
//! - Clamped progress percentage
//! - Draft (create) and patch (edit) inputs

use crate::attachment::Attachment;
use crate::error::ModelError;
use crate::id::ProjectId;
use crate::serde_util::{deserialize_optional_date, null_as_default, serialize_optional_date};
use crate::step::{Step, StepList};
use crate::template::StepTemplate;
use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexSet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Workflow stage, in workflow order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Stage {
    /// Project setup
    #[default]
    Planning,
    /// Gathering samples or data
    DataCollection,
    /// Quality control of raw data
    QualityControl,
    /// Processing raw data
    DataProcessing,
    /// Analysis
    Analysis,
    /// Assembly
    Assembly,
    /// Annotation
    Annotation,
    /// Visualization
    Visualization,
    /// Validation
    Validation,
    /// Finished
    Complete,
}

impl Stage {
    /// All stages in workflow order
    pub const ALL: [Stage; 10] = [
        Stage::Planning,
        Stage::DataCollection,
        Stage::QualityControl,
        Stage::DataProcessing,
        Stage::Analysis,
        Stage::Assembly,
        Stage::Annotation,
        Stage::Visualization,
        Stage::Validation,
        Stage::Complete,
    ];

    /// Display label (also the persisted form)
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Planning => "Planning",
            Stage::DataCollection => "Data Collection",
            Stage::QualityControl => "Quality Control",
            Stage::DataProcessing => "Data Processing",
            Stage::Analysis => "Analysis",
            Stage::Assembly => "Assembly",
            Stage::Annotation => "Annotation",
            Stage::Visualization => "Visualization",
            Stage::Validation => "Validation",
            Stage::Complete => "Complete",
        }
    }

    /// Neither the first nor the last stage
    #[inline]
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        !matches!(self, Stage::Planning | Stage::Complete)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Stage {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|stage| stage.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ModelError::UnknownStage(s.to_string()))
    }
}

impl Serialize for Stage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Stage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        let parsed = raw.as_deref().and_then(|value| value.parse().ok());
        Ok(parsed.unwrap_or_else(|| {
            tracing::warn!(value = ?raw, "unrecognized stage, loading as Planning");
            Stage::Planning
        }))
    }
}

/// Urgency level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Priority {
    /// Low urgency
    Low,
    /// Normal urgency
    #[default]
    Medium,
    /// High urgency
    High,
    /// Drop everything
    Critical,
}

impl Priority {
    /// All priorities, lowest first
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    /// Display label (also the persisted form)
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }

    /// High or Critical
    #[inline]
    #[must_use]
    pub fn is_high(&self) -> bool {
        *self >= Priority::High
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ModelError::UnknownPriority(s.to_string()))
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        let parsed = raw.as_deref().and_then(|value| value.parse().ok());
        Ok(parsed.unwrap_or_else(|| {
            tracing::warn!(value = ?raw, "unrecognized priority, loading as Medium");
            Priority::Medium
        }))
    }
}

/// Completion percentage, always within `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Progress(u8);

impl Progress {
    /// Zero progress
    pub const ZERO: Progress = Progress(0);
    /// Fully complete
    pub const COMPLETE: Progress = Progress(100);

    /// Create progress, clamping into `0..=100`
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    /// Percentage value
    #[inline]
    #[must_use]
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Exactly 100
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0 == 100
    }
}

impl From<u8> for Progress {
    fn from(value: u8) -> Self {
        Self::new(i64::from(value))
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl<'de> Deserialize<'de> for Progress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawProgress {
            Integer(i64),
            Float(f64),
            Text(String),
        }

        #[allow(clippy::cast_possible_truncation)]
        let value = match Option::<RawProgress>::deserialize(deserializer)? {
            None => 0,
            Some(RawProgress::Integer(n)) => n,
            Some(RawProgress::Float(f)) => f.round().clamp(0.0, 100.0) as i64,
            Some(RawProgress::Text(s)) => s.trim().parse().unwrap_or(0),
        };
        Ok(Self::new(value))
    }
}

/// A tracked research project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Immutable identifier
    pub id: ProjectId,
    /// Project name
    pub name: String,
    /// Current workflow stage
    #[serde(default)]
    pub stage: Stage,
    /// Completion percentage
    #[serde(default)]
    pub progress: Progress,
    /// Urgency
    #[serde(default)]
    pub priority: Priority,
    /// Start date
    #[serde(
        default,
        deserialize_with = "deserialize_optional_date",
        serialize_with = "serialize_optional_date"
    )]
    pub start_date: Option<NaiveDate>,
    /// Due date
    #[serde(
        default,
        deserialize_with = "deserialize_optional_date",
        serialize_with = "serialize_optional_date"
    )]
    pub due_date: Option<NaiveDate>,
    /// Free-text description
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Steps already done, in order
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed_steps: Vec<Step>,
    /// Steps still to do, in order
    #[serde(default, deserialize_with = "null_as_default")]
    pub next_steps: Vec<Step>,
    /// Attached file metadata
    #[serde(default, deserialize_with = "null_as_default")]
    pub attachments: Vec<Attachment>,
    /// Labels, de-duplicated in insertion order
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: IndexSet<String>,
    /// Tracked time in seconds
    #[serde(default, deserialize_with = "null_as_default")]
    pub time_tracked: u64,
    /// Last time a tracked session was closed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<DateTime<Utc>>,
}

impl Project {
    /// Step list by kind
    #[inline]
    #[must_use]
    pub fn steps(&self, list: StepList) -> &[Step] {
        match list {
            StepList::Completed => &self.completed_steps,
            StepList::Next => &self.next_steps,
        }
    }

    /// Mutable step list by kind
    #[inline]
    pub fn steps_mut(&mut self, list: StepList) -> &mut Vec<Step> {
        match list {
            StepList::Completed => &mut self.completed_steps,
            StepList::Next => &mut self.next_steps,
        }
    }

    /// Completed plus next steps
    #[inline]
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.completed_steps.len() + self.next_steps.len()
    }

    /// All step texts, completed first
    pub fn step_texts(&self) -> impl Iterator<Item = &str> {
        self.completed_steps
            .iter()
            .chain(&self.next_steps)
            .map(|s| s.text.as_str())
    }

    /// Progress is exactly 100
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress.is_complete()
    }

    /// Whole days from `today` to the due date (negative when past)
    #[inline]
    #[must_use]
    pub fn days_until_due(&self, today: NaiveDate) -> Option<i64> {
        self.due_date.map(|due| (due - today).num_days())
    }

    /// Due date strictly before `today` and not complete
    #[inline]
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_complete() && self.days_until_due(today).is_some_and(|d| d < 0)
    }

    /// Whole days from start to due date, when both are set
    #[inline]
    #[must_use]
    pub fn planned_duration_days(&self) -> Option<i64> {
        match (self.start_date, self.due_date) {
            (Some(start), Some(due)) => Some((due - start).num_days()),
            _ => None,
        }
    }
}

/// Form data for a new project
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDraft {
    /// Project name
    pub name: String,
    /// Initial stage
    pub stage: Stage,
    /// Initial progress
    pub progress: Progress,
    /// Priority
    pub priority: Priority,
    /// Start date
    pub start_date: Option<NaiveDate>,
    /// Due date
    pub due_date: Option<NaiveDate>,
    /// Description
    pub description: String,
    /// Completed steps
    pub completed_steps: Vec<Step>,
    /// Next steps
    pub next_steps: Vec<Step>,
    /// Attachments
    pub attachments: Vec<Attachment>,
    /// Tags
    pub tags: IndexSet<String>,
    /// Tracked seconds
    pub time_tracked: u64,
}

impl ProjectDraft {
    /// Create draft with defaults (Planning, 0%, Medium)
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// With stage
    #[inline]
    #[must_use]
    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stage = stage;
        self
    }

    /// With progress (clamped)
    #[inline]
    #[must_use]
    pub fn with_progress(mut self, progress: i64) -> Self {
        self.progress = Progress::new(progress);
        self
    }

    /// With priority
    #[inline]
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// With start and due dates
    #[inline]
    #[must_use]
    pub fn with_dates(mut self, start: Option<NaiveDate>, due: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.due_date = due;
        self
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// With a tag (duplicates ignored)
    #[inline]
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        insert_tag(&mut self.tags, tag.into());
        self
    }

    /// With a step appended to a list
    #[inline]
    #[must_use]
    pub fn with_step(mut self, list: StepList, step: Step) -> Self {
        match list {
            StepList::Completed => self.completed_steps.push(step),
            StepList::Next => self.next_steps.push(step),
        }
        self
    }

    /// Append template steps: the first third as completed, the rest as next
    pub fn apply_template(&mut self, template: &StepTemplate) {
        let steps = template.steps();
        let split = steps.len() / 3;
        let (done, todo) = steps.split_at(split);
        self.completed_steps.extend_from_slice(done);
        self.next_steps.extend_from_slice(todo);
    }

    /// Validate and build the project, dropping blank steps
    pub fn into_project(self, id: ProjectId) -> Result<Project, ModelError> {
        let name = validate_name(&self.name)?;
        Ok(Project {
            id,
            name,
            stage: self.stage,
            progress: self.progress,
            priority: self.priority,
            start_date: self.start_date,
            due_date: self.due_date,
            description: self.description,
            completed_steps: without_blank(self.completed_steps),
            next_steps: without_blank(self.next_steps),
            attachments: self.attachments,
            tags: self.tags,
            time_tracked: self.time_tracked,
            last_activity: None,
        })
    }
}

/// Field replacements merged into an existing project
///
/// `None` leaves a field untouched. Date fields are doubly optional so a
/// patch can clear a date.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectPatch {
    /// New name
    pub name: Option<String>,
    /// New stage
    pub stage: Option<Stage>,
    /// New progress
    pub progress: Option<Progress>,
    /// New priority
    pub priority: Option<Priority>,
    /// New (or cleared) start date
    pub start_date: Option<Option<NaiveDate>>,
    /// New (or cleared) due date
    pub due_date: Option<Option<NaiveDate>>,
    /// New description
    pub description: Option<String>,
    /// Replacement completed steps
    pub completed_steps: Option<Vec<Step>>,
    /// Replacement next steps
    pub next_steps: Option<Vec<Step>>,
    /// Replacement attachments
    pub attachments: Option<Vec<Attachment>>,
    /// Replacement tags
    pub tags: Option<IndexSet<String>>,
}

impl ProjectPatch {
    /// Empty patch
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With name
    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// With stage
    #[inline]
    #[must_use]
    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stage = Some(stage);
        self
    }

    /// With progress (clamped)
    #[inline]
    #[must_use]
    pub fn with_progress(mut self, progress: i64) -> Self {
        self.progress = Some(Progress::new(progress));
        self
    }

    /// With priority
    #[inline]
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// With start date (`None` clears it)
    #[inline]
    #[must_use]
    pub fn with_start_date(mut self, date: Option<NaiveDate>) -> Self {
        self.start_date = Some(date);
        self
    }

    /// With due date (`None` clears it)
    #[inline]
    #[must_use]
    pub fn with_due_date(mut self, date: Option<NaiveDate>) -> Self {
        self.due_date = Some(date);
        self
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// With replacement steps for one list
    #[inline]
    #[must_use]
    pub fn with_steps(mut self, list: StepList, steps: Vec<Step>) -> Self {
        match list {
            StepList::Completed => self.completed_steps = Some(steps),
            StepList::Next => self.next_steps = Some(steps),
        }
        self
    }

    /// With replacement tags
    #[inline]
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = IndexSet::new();
        for tag in tags {
            insert_tag(&mut set, tag.into());
        }
        self.tags = Some(set);
        self
    }

    /// Patch sets no field
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge into `project`; on error the project is left untouched
    pub fn apply(self, project: &mut Project) -> Result<(), ModelError> {
        let name = self.name.as_deref().map(validate_name).transpose()?;

        if let Some(name) = name {
            project.name = name;
        }
        if let Some(stage) = self.stage {
            project.stage = stage;
        }
        if let Some(progress) = self.progress {
            project.progress = progress;
        }
        if let Some(priority) = self.priority {
            project.priority = priority;
        }
        if let Some(start) = self.start_date {
            project.start_date = start;
        }
        if let Some(due) = self.due_date {
            project.due_date = due;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(steps) = self.completed_steps {
            project.completed_steps = steps;
        }
        if let Some(steps) = self.next_steps {
            project.next_steps = steps;
        }
        if let Some(attachments) = self.attachments {
            project.attachments = attachments;
        }
        if let Some(tags) = self.tags {
            project.tags = tags;
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<String, ModelError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ModelError::EmptyName);
    }
    Ok(trimmed.to_string())
}

fn without_blank(steps: Vec<Step>) -> Vec<Step> {
    steps.into_iter().filter(|s| !s.is_blank()).collect()
}

fn insert_tag(tags: &mut IndexSet<String>, tag: String) {
    let tag = tag.trim();
    if !tag.is_empty() {
        tags.insert(tag.to_string());
    }
}
