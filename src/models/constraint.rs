//! Date constraints on individual tasks.
//!
//! A constraint is applied by the resolver *after* the unconstrained
//! forward/backward passes. Hard constraints override the computed date
//! outright; soft constraints only bound it.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use cpm_engine::models::DateConstraint;
//!
//! let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
//! assert!(DateConstraint::MustStartOn(date).is_hard());
//! assert!(!DateConstraint::StartNoEarlierThan(date).is_hard());
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A date constraint carried by a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateConstraint {
    /// Hard: the task starts on exactly this date.
    MustStartOn(NaiveDate),
    /// Hard: the task finishes on exactly this date.
    MustFinishOn(NaiveDate),
    /// Soft: the task may not start before this date.
    StartNoEarlierThan(NaiveDate),
    /// Soft: the task should not finish after this date.
    FinishNoLaterThan(NaiveDate),
}

impl DateConstraint {
    /// Whether this constraint overrides computed dates rather than bounding them.
    pub fn is_hard(&self) -> bool {
        matches!(self, Self::MustStartOn(_) | Self::MustFinishOn(_))
    }

    /// The date the constraint carries.
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::MustStartOn(d)
            | Self::MustFinishOn(d)
            | Self::StartNoEarlierThan(d)
            | Self::FinishNoLaterThan(d) => *d,
        }
    }

    /// Short display label, e.g. for diagnostic messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MustStartOn(_) => "must start on",
            Self::MustFinishOn(_) => "must finish on",
            Self::StartNoEarlierThan(_) => "start no earlier than",
            Self::FinishNoLaterThan(_) => "finish no later than",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    #[test]
    fn test_hardness() {
        assert!(DateConstraint::MustStartOn(date()).is_hard());
        assert!(DateConstraint::MustFinishOn(date()).is_hard());
        assert!(!DateConstraint::StartNoEarlierThan(date()).is_hard());
        assert!(!DateConstraint::FinishNoLaterThan(date()).is_hard());
    }

    #[test]
    fn test_date_accessor() {
        assert_eq!(DateConstraint::FinishNoLaterThan(date()).date(), date());
    }

    #[test]
    fn test_labels() {
        assert_eq!(DateConstraint::MustStartOn(date()).label(), "must start on");
        assert_eq!(
            DateConstraint::StartNoEarlierThan(date()).label(),
            "start no earlier than"
        );
    }
}
