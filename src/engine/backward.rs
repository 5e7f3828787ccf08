//! Backward pass: late start/finish computation.
//!
//! Iterates the reverse topological order, folding each task's successor
//! bounds: FS/FF edges bound the finish, SS/SF edges bound the start. Tasks
//! with no finish-type bound (terminal tasks, or tasks whose only successors
//! are start-linked) seed at the project horizon. `FinishNoLaterThan` caps
//! are applied here so they tighten every upstream late date.

use crate::graph::DependencyGraph;
use crate::models::{LinkType, Task};

use super::constraints::ResolvedConstraints;

/// Late dates in working-day offsets, aligned with the task slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LateDates {
    pub(crate) start: Vec<i64>,
    pub(crate) finish: Vec<i64>,
}

/// Runs the backward pass from the given horizon offset.
///
/// The horizon is the explicit target finish when the caller supplied one,
/// otherwise the maximum early finish over all tasks.
pub(crate) fn backward_pass(
    tasks: &[Task],
    graph: &DependencyGraph,
    horizon: i64,
    constraints: Option<&ResolvedConstraints>,
) -> LateDates {
    let n = tasks.len();
    let mut start = vec![0i64; n];
    let mut finish = vec![0i64; n];

    for &i in graph.topo_order().iter().rev() {
        let duration = tasks[i].duration_days.max(0);

        let mut start_bound: Option<i64> = None;
        let mut finish_bound: Option<i64> = None;
        for edge in graph.successors_of(i) {
            let s = edge.successor;
            let (bound, value) = match edge.link {
                LinkType::FinishToStart => (&mut finish_bound, start[s] - edge.lag_days),
                LinkType::FinishToFinish => (&mut finish_bound, finish[s] - edge.lag_days),
                LinkType::StartToStart => (&mut start_bound, start[s] - edge.lag_days),
                LinkType::StartToFinish => (&mut start_bound, finish[s] - edge.lag_days),
            };
            *bound = Some(bound.map_or(value, |b: i64| b.min(value)));
        }

        let mut lf = finish_bound.unwrap_or(horizon);
        if let Some(cap) = constraints.and_then(|c| c.finish_cap(i)) {
            lf = lf.min(cap);
        }
        let mut ls = lf - duration;
        if let Some(sb) = start_bound {
            if sb < ls {
                ls = sb;
                lf = ls + duration;
            }
        }

        start[i] = ls;
        finish[i] = lf;
    }

    LateDates { start, finish }
}
