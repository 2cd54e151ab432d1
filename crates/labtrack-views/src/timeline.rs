//! Schedule position of a single project

use chrono::NaiveDate;
use labtrack_model::Project;
use serde::Serialize;

/// Where `today` falls between a project's start and due dates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    /// Start date
    pub start: NaiveDate,
    /// Due date
    pub due: NaiveDate,
    /// Whole days from start to due (may be zero or negative)
    pub total_days: i64,
    /// Whole days since start, never negative
    pub elapsed_days: i64,
    /// Elapsed share of the schedule in `[0, 100]`
    pub percent: f64,
}

impl Timeline {
    /// Elapsed share rounded to a whole percent
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rounded_percent(&self) -> u8 {
        self.percent.round() as u8
    }
}

/// Timeline for `project`, `None` unless both dates are set
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn timeline(project: &Project, today: NaiveDate) -> Option<Timeline> {
    let (start, due) = (project.start_date?, project.due_date?);
    let total_days = (due - start).num_days();
    let elapsed_days = (today - start).num_days().max(0);
    let percent = if total_days <= 0 {
        0.0
    } else {
        (elapsed_days as f64 / total_days as f64 * 100.0).min(100.0)
    };

    Some(Timeline {
        start,
        due,
        total_days,
        elapsed_days,
        percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use labtrack_model::{ProjectDraft, ProjectId};

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn dated(start: Option<NaiveDate>, due: Option<NaiveDate>) -> Project {
        ProjectDraft::new("t")
            .with_dates(start, due)
            .into_project(ProjectId::new())
            .unwrap()
    }

    #[test]
    fn needs_both_dates() {
        assert!(timeline(&dated(Some(d(1)), None), d(5)).is_none());
        assert!(timeline(&dated(None, Some(d(9))), d(5)).is_none());
    }

    #[test]
    fn midway() {
        let t = timeline(&dated(Some(d(1)), Some(d(11))), d(6)).unwrap();
        assert_eq!(t.total_days, 10);
        assert_eq!(t.elapsed_days, 5);
        assert_eq!(t.rounded_percent(), 50);
    }

    #[test]
    fn before_start_and_after_due_are_clamped() {
        let p = dated(Some(d(10)), Some(d(20)));
        let early = timeline(&p, d(2)).unwrap();
        assert_eq!(early.elapsed_days, 0);
        assert_eq!(early.percent, 0.0);

        let late = timeline(&p, d(30)).unwrap();
        assert_eq!(late.elapsed_days, 20);
        assert_eq!(late.percent, 100.0);
    }

    #[test]
    fn empty_or_reversed_schedule_is_zero_percent() {
        assert_eq!(timeline(&dated(Some(d(5)), Some(d(5))), d(9)).unwrap().percent, 0.0);
        let reversed = timeline(&dated(Some(d(9)), Some(d(5))), d(12)).unwrap();
        assert_eq!(reversed.total_days, -4);
        assert_eq!(reversed.percent, 0.0);
    }
}
