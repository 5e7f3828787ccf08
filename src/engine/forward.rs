//! Forward pass: early start/finish computation.
//!
//! Iterates the topological order, folding each task's predecessor bounds:
//! FS/SS edges bound the start, FF/SF edges bound the finish. A task with no
//! binding start constraint starts at the data date (offset 0). A later
//! finish bound back-derives the start as `finish − duration`.
//!
//! The same routine performs the constraint re-propagation pass: when given
//! resolved constraints it applies overrides and floors inline, so shifted
//! dates reach every downstream successor, and conflicts become warnings.

use crate::graph::DependencyGraph;
use crate::models::{LinkType, ScheduleWarning, Task};

use super::constraints::{OffsetConstraint, ResolvedConstraints};

/// Early dates in working-day offsets, aligned with the task slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EarlyDates {
    pub(crate) start: Vec<i64>,
    pub(crate) finish: Vec<i64>,
}

/// Runs the forward pass.
///
/// With `constraints = None` this is the pure dependency-logic pass; with
/// constraints it is the resolver's re-propagation pass, and conflicts are
/// appended to `warnings`.
pub(crate) fn forward_pass(
    tasks: &[Task],
    graph: &DependencyGraph,
    constraints: Option<&ResolvedConstraints>,
    warnings: &mut Vec<ScheduleWarning>,
) -> EarlyDates {
    let n = tasks.len();
    let mut start = vec![0i64; n];
    let mut finish = vec![0i64; n];

    for &i in graph.topo_order() {
        let duration = tasks[i].duration_days.max(0);

        let mut start_bound: Option<i64> = None;
        let mut finish_bound: Option<i64> = None;
        for edge in graph.predecessors_of(i) {
            let p = edge.predecessor;
            let (bound, value) = match edge.link {
                LinkType::FinishToStart => (&mut start_bound, finish[p] + edge.lag_days),
                LinkType::StartToStart => (&mut start_bound, start[p] + edge.lag_days),
                LinkType::FinishToFinish => (&mut finish_bound, finish[p] + edge.lag_days),
                LinkType::StartToFinish => (&mut finish_bound, start[p] + edge.lag_days),
            };
            *bound = Some(bound.map_or(value, |b: i64| b.max(value)));
        }

        // Tasks never start before the data date, even under a lead.
        let mut es = start_bound.unwrap_or(0).max(0);
        let mut ef = es + duration;
        if let Some(fb) = finish_bound {
            if fb > ef {
                ef = fb;
                es = ef - duration;
            }
        }

        if let Some(resolved) = constraints {
            match resolved.get(i) {
                Some(OffsetConstraint::StartOverride(offset)) => {
                    if offset < es {
                        warnings.push(ScheduleWarning::constraint_violation(
                            &tasks[i].id,
                            format!(
                                "must-start-on places the start {} working day(s) before dependency logic allows",
                                es - offset
                            ),
                        ));
                    }
                    es = offset;
                    ef = es + duration;
                }
                Some(OffsetConstraint::FinishOverride(offset)) => {
                    if offset < ef {
                        warnings.push(ScheduleWarning::constraint_violation(
                            &tasks[i].id,
                            format!(
                                "must-finish-on places the finish {} working day(s) before dependency logic allows",
                                ef - offset
                            ),
                        ));
                    }
                    ef = offset;
                    es = (ef - duration).max(0);
                }
                Some(OffsetConstraint::StartFloor(offset)) => {
                    if offset > es {
                        es = offset;
                        ef = es + duration;
                        if let Some(fb) = finish_bound {
                            if fb > ef {
                                ef = fb;
                                es = ef - duration;
                            }
                        }
                    }
                }
                Some(OffsetConstraint::FinishCap(_)) | None => {}
            }
        }

        if ef < es {
            warnings.push(ScheduleWarning::negative_duration(
                &tasks[i].id,
                format!(
                    "finish offset {ef} precedes start offset {es}; clamped to zero length"
                ),
            ));
            ef = es;
        }

        start[i] = es;
        finish[i] = ef;
    }

    EarlyDates { start, finish }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Calendar, DateConstraint, Dependency};
    use chrono::NaiveDate;

    fn run(tasks: &[Task]) -> EarlyDates {
        let graph = DependencyGraph::build(tasks).unwrap();
        forward_pass(tasks, &graph, None, &mut Vec::new())
    }

    fn dep(pred: &str, link: LinkType, lag: i64) -> Dependency {
        Dependency::new(pred).with_link(link).with_lag(lag)
    }

    #[test]
    fn test_fs_chain_with_lag() {
        // Spec scenario: A(5) → B(3) FS lag 0 → C(2) FS lag 2.
        let tasks = vec![
            Task::new("A").with_duration(5),
            Task::new("B").with_duration(3).depends_on("A"),
            Task::new("C")
                .with_duration(2)
                .with_dependency(dep("B", LinkType::FinishToStart, 2)),
        ];
        let early = run(&tasks);

        assert_eq!(early.start, vec![0, 5, 10]);
        assert_eq!(early.finish, vec![5, 8, 12]);
    }

    #[test]
    fn test_ss_bound() {
        let tasks = vec![
            Task::new("A").with_duration(5),
            Task::new("B")
                .with_duration(4)
                .with_dependency(dep("A", LinkType::StartToStart, 2)),
        ];
        let early = run(&tasks);
        assert_eq!(early.start[1], 2);
        assert_eq!(early.finish[1], 6);
    }

    #[test]
    fn test_ff_bound_back_derives_start() {
        // B's finish forced to A's finish + 1; start back-derived.
        let tasks = vec![
            Task::new("A").with_duration(8),
            Task::new("B")
                .with_duration(3)
                .with_dependency(dep("A", LinkType::FinishToFinish, 1)),
        ];
        let early = run(&tasks);
        assert_eq!(early.finish[1], 9);
        assert_eq!(early.start[1], 6);
    }

    #[test]
    fn test_sf_bound() {
        // B must finish 4 days after A starts; duration 2 → start 2.
        let tasks = vec![
            Task::new("A").with_duration(8),
            Task::new("B")
                .with_duration(2)
                .with_dependency(dep("A", LinkType::StartToFinish, 4)),
        ];
        let early = run(&tasks);
        assert_eq!(early.finish[1], 4);
        assert_eq!(early.start[1], 2);
    }

    #[test]
    fn test_lead_clamps_at_data_date() {
        // FS with lead -10 would start B before the data date; clamped to 0.
        let tasks = vec![
            Task::new("A").with_duration(5),
            Task::new("B")
                .with_duration(3)
                .with_dependency(dep("A", LinkType::FinishToStart, -10)),
        ];
        let early = run(&tasks);
        assert_eq!(early.start[1], 0);
        assert_eq!(early.finish[1], 3);
    }

    #[test]
    fn test_max_over_multiple_predecessors() {
        let tasks = vec![
            Task::new("A").with_duration(2),
            Task::new("B").with_duration(7),
            Task::new("C")
                .with_duration(1)
                .depends_on("A")
                .depends_on("B"),
        ];
        let early = run(&tasks);
        assert_eq!(early.start[2], 7);
    }

    #[test]
    fn test_must_start_on_conflict_warns() {
        let data = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        let day3 = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
        let tasks = vec![
            Task::new("A").with_duration(5),
            Task::new("B")
                .with_duration(3)
                .depends_on("A")
                .with_constraint(DateConstraint::MustStartOn(day3)),
        ];
        let graph = DependencyGraph::build(&tasks).unwrap();
        let resolved =
            super::super::constraints::ResolvedConstraints::resolve(&tasks, &Calendar::standard(), data);
        let mut warnings = Vec::new();
        let early = forward_pass(&tasks, &graph, Some(&resolved), &mut warnings);

        // Constrained date wins: start forced to offset 3 although A finishes at 5.
        assert_eq!(early.start[1], 3);
        assert_eq!(early.finish[1], 6);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("2 working day(s)"));
    }

    #[test]
    fn test_must_finish_on_before_start_clamps() {
        let data = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        let before = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        let tasks = vec![Task::new("A")
            .with_duration(5)
            .with_constraint(DateConstraint::MustFinishOn(before))];
        let graph = DependencyGraph::build(&tasks).unwrap();
        let resolved =
            super::super::constraints::ResolvedConstraints::resolve(&tasks, &Calendar::standard(), data);
        let mut warnings = Vec::new();
        let early = forward_pass(&tasks, &graph, Some(&resolved), &mut warnings);

        // Finish before the data date: start clamps to 0, finish clamps to start.
        assert_eq!(early.start[0], 0);
        assert_eq!(early.finish[0], 0);
        assert!(warnings
            .iter()
            .any(|w| w.kind == crate::models::WarningKind::NegativeDuration));
        assert!(warnings
            .iter()
            .any(|w| w.kind == crate::models::WarningKind::ConstraintViolation));
    }
}
