//! Project steps
//!
//! A step is a categorized unit of work. Projects keep two ordered step
//! lists: completed steps and next steps.

use crate::error::ModelError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Step category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub enum StepCategory {
    /// Wet-lab work
    #[serde(rename = "Lab Work")]
    LabWork,
    /// Computational analysis
    Analysis,
    /// Reports and manuscripts
    Documentation,
    /// Review activities
    Review,
    /// Anything else
    #[default]
    Other,
}

impl StepCategory {
    /// All categories in display order
    pub const ALL: [StepCategory; 5] = [
        StepCategory::LabWork,
        StepCategory::Analysis,
        StepCategory::Documentation,
        StepCategory::Review,
        StepCategory::Other,
    ];

    /// Display label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            StepCategory::LabWork => "Lab Work",
            StepCategory::Analysis => "Analysis",
            StepCategory::Documentation => "Documentation",
            StepCategory::Review => "Review",
            StepCategory::Other => "Other",
        }
    }
}

impl fmt::Display for StepCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StepCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ModelError::UnknownCategory(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for StepCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        Ok(raw.parse().unwrap_or_default())
    }
}

/// A unit of work
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Step description
    pub text: String,
    /// Step category
    pub category: StepCategory,
}

impl Step {
    /// Create new step
    #[inline]
    #[must_use]
    pub fn new(text: impl Into<String>, category: StepCategory) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    /// Whether the step text is blank
    #[inline]
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Persisted step: either a legacy bare string or a record
#[derive(Deserialize)]
#[serde(untagged)]
enum RawStep {
    Bare(String),
    Record {
        #[serde(default)]
        text: Option<String>,
        #[serde(default)]
        category: StepCategory,
    },
}

impl<'de> Deserialize<'de> for Step {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawStep::deserialize(deserializer)? {
            RawStep::Bare(text) => Step::new(text, StepCategory::Other),
            RawStep::Record { text, category } => Step::new(text.unwrap_or_default(), category),
        })
    }
}

/// Which of a project's two step lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepList {
    /// `completedSteps`
    Completed,
    /// `nextSteps`
    Next,
}
