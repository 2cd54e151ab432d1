//! Error types for the project model

/// Validation and parsing errors for project records
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Project name is empty after trimming
    #[error("project name must not be empty")]
    EmptyName,

    /// Stage label is not part of the workflow
    #[error("unknown stage: '{0}'")]
    UnknownStage(String),

    /// Priority label is not one of the four levels
    #[error("unknown priority: '{0}'")]
    UnknownPriority(String),

    /// Step category label is not recognized
    #[error("unknown step category: '{0}'")]
    UnknownCategory(String),

    /// Date is not in `YYYY-MM-DD` form
    #[error("invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input
        value: String,
    },
}

impl ModelError {
    /// Create invalid date error
    #[inline]
    pub fn invalid_date(value: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_error_display() {
        assert_eq!(
            ModelError::EmptyName.to_string(),
            "project name must not be empty"
        );
        assert!(ModelError::invalid_date("tomorrow")
            .to_string()
            .contains("tomorrow"));
    }
}
