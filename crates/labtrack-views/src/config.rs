//! Thresholds used by the insight and suggestion rules

use serde::{Deserialize, Serialize};

/// View thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Due within this many days counts as an upcoming deadline
    pub upcoming_window_days: i64,
    /// Focus project due within `1..=deadline_alert_days` raises an alert
    pub deadline_alert_days: i64,
    /// Progress strictly above this (and below 100) is "almost done"
    pub almost_done_threshold: u8,
    /// Progress strictly below this (and above 0) can be stagnant
    pub stagnant_ceiling: u8,
}

impl ViewConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With upcoming-deadline window
    #[inline]
    #[must_use]
    pub fn with_upcoming_window(mut self, days: i64) -> Self {
        self.upcoming_window_days = days;
        self
    }

    /// With deadline alert horizon
    #[inline]
    #[must_use]
    pub fn with_deadline_alert(mut self, days: i64) -> Self {
        self.deadline_alert_days = days;
        self
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            upcoming_window_days: 7,
            deadline_alert_days: 3,
            almost_done_threshold: 80,
            stagnant_ceiling: 90,
        }
    }
}
