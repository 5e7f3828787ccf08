//! Constraint resolution.
//!
//! Converts task date constraints into working-day offsets and decides how
//! they enter the passes: hard constraints (`MustStartOn`/`MustFinishOn`)
//! override early dates and trigger one re-propagation forward pass over the
//! network; `StartNoEarlierThan` floors the early start; `FinishNoLaterThan`
//! caps the late finish in the backward pass. Hard constraints always win
//! over dependency logic, and every conflict is surfaced as a
//! [`ScheduleWarning`](crate::models::ScheduleWarning) — logic is never
//! silently dropped.

use chrono::NaiveDate;

use crate::models::{Calendar, DateConstraint, Task};

/// A task's constraint expressed in working-day offsets from the data date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OffsetConstraint {
    /// `MustStartOn`: early start is overridden to this offset.
    StartOverride(i64),
    /// `MustFinishOn`: early finish is overridden to this offset.
    FinishOverride(i64),
    /// `StartNoEarlierThan`: early start is floored at this offset.
    StartFloor(i64),
    /// `FinishNoLaterThan`: late finish is capped at this offset.
    FinishCap(i64),
}

/// Per-task resolved constraints, aligned with the task slice by index.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConstraints {
    per_task: Vec<Option<OffsetConstraint>>,
}

impl ResolvedConstraints {
    /// Resolves each task's constraint date to a working-day offset.
    ///
    /// Constraint dates are rolled forward to a working day before
    /// conversion, so a constraint set on a weekend binds the next working
    /// day.
    pub(crate) fn resolve(tasks: &[Task], calendar: &Calendar, data_date: NaiveDate) -> Self {
        let anchor = calendar.roll_forward(data_date);
        let to_offset =
            |d: NaiveDate| calendar.working_days_between(anchor, calendar.roll_forward(d));

        let per_task = tasks
            .iter()
            .map(|task| {
                task.constraint.as_ref().map(|c| match c {
                    DateConstraint::MustStartOn(d) => OffsetConstraint::StartOverride(to_offset(*d)),
                    DateConstraint::MustFinishOn(d) => {
                        OffsetConstraint::FinishOverride(to_offset(*d))
                    }
                    DateConstraint::StartNoEarlierThan(d) => {
                        OffsetConstraint::StartFloor(to_offset(*d))
                    }
                    DateConstraint::FinishNoLaterThan(d) => {
                        OffsetConstraint::FinishCap(to_offset(*d))
                    }
                })
            })
            .collect();

        Self { per_task }
    }

    /// The resolved constraint for a task index, if any.
    pub(crate) fn get(&self, task: usize) -> Option<OffsetConstraint> {
        self.per_task[task]
    }

    /// Whether any constraint shifts early dates, requiring the
    /// re-propagation forward pass.
    pub(crate) fn affects_forward_pass(&self) -> bool {
        self.per_task.iter().flatten().any(|c| {
            matches!(
                c,
                OffsetConstraint::StartOverride(_)
                    | OffsetConstraint::FinishOverride(_)
                    | OffsetConstraint::StartFloor(_)
            )
        })
    }

    /// Late-finish cap for a task index, if any.
    pub(crate) fn finish_cap(&self, task: usize) -> Option<i64> {
        match self.per_task[task] {
            Some(OffsetConstraint::FinishCap(offset)) => Some(offset),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn test_resolution_to_offsets() {
        // Data date Monday Jan 6; Jan 13 is 5 working days out.
        let tasks = vec![
            Task::new("A").with_constraint(DateConstraint::MustStartOn(date(13))),
            Task::new("B").with_constraint(DateConstraint::FinishNoLaterThan(date(13))),
            Task::new("C"),
        ];
        let resolved = ResolvedConstraints::resolve(&tasks, &Calendar::standard(), date(6));

        assert_eq!(resolved.get(0), Some(OffsetConstraint::StartOverride(5)));
        assert_eq!(resolved.get(1), Some(OffsetConstraint::FinishCap(5)));
        assert_eq!(resolved.get(2), None);
        assert_eq!(resolved.finish_cap(1), Some(5));
        assert_eq!(resolved.finish_cap(0), None);
    }

    #[test]
    fn test_weekend_constraint_rolls_forward() {
        // Jan 11 is a Saturday; binds Monday Jan 13 instead.
        let tasks = vec![Task::new("A").with_constraint(DateConstraint::StartNoEarlierThan(date(11)))];
        let resolved = ResolvedConstraints::resolve(&tasks, &Calendar::standard(), date(6));
        assert_eq!(resolved.get(0), Some(OffsetConstraint::StartFloor(5)));
    }

    #[test]
    fn test_constraint_before_data_date_is_negative() {
        let tasks = vec![Task::new("A").with_constraint(DateConstraint::MustFinishOn(date(2)))];
        let resolved = ResolvedConstraints::resolve(&tasks, &Calendar::standard(), date(6));
        assert_eq!(resolved.get(0), Some(OffsetConstraint::FinishOverride(-2)));
    }

    #[test]
    fn test_forward_effect_detection() {
        let cap_only =
            vec![Task::new("A").with_constraint(DateConstraint::FinishNoLaterThan(date(13)))];
        let resolved = ResolvedConstraints::resolve(&cap_only, &Calendar::standard(), date(6));
        assert!(!resolved.affects_forward_pass());

        let floor = vec![Task::new("A").with_constraint(DateConstraint::StartNoEarlierThan(date(13)))];
        let resolved = ResolvedConstraints::resolve(&floor, &Calendar::standard(), date(6));
        assert!(resolved.affects_forward_pass());
    }
}
