//! Float computation and criticality classification.
//!
//! Total float is the gap between the late and early schedule; free float is
//! the slack on a task's tightest outgoing edge, the amount it can slip
//! without moving any successor. A task is critical when its total float is
//! at or below the configured threshold (0 by default; raising it tolerates
//! near-critical noise).

use crate::graph::DependencyGraph;
use crate::models::LinkType;

use super::backward::LateDates;
use super::forward::EarlyDates;

/// Floats and criticality flags, aligned with the task slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Floats {
    pub(crate) total: Vec<i64>,
    pub(crate) free: Vec<i64>,
    pub(crate) critical: Vec<bool>,
}

/// Derives floats and criticality from the completed passes.
pub(crate) fn classify(
    graph: &DependencyGraph,
    early: &EarlyDates,
    late: &LateDates,
    criticality_threshold: i64,
) -> Floats {
    let n = early.start.len();
    let mut total = Vec::with_capacity(n);
    let mut free = Vec::with_capacity(n);
    let mut critical = Vec::with_capacity(n);

    for i in 0..n {
        let tf = late.start[i] - early.start[i];

        // Free float: minimum slack over outgoing edges, measured between the
        // endpoints each link type actually relates.
        let ff = graph
            .successors_of(i)
            .iter()
            .map(|edge| {
                let s = edge.successor;
                match edge.link {
                    LinkType::FinishToStart => early.start[s] - edge.lag_days - early.finish[i],
                    LinkType::StartToStart => early.start[s] - edge.lag_days - early.start[i],
                    LinkType::FinishToFinish => early.finish[s] - edge.lag_days - early.finish[i],
                    LinkType::StartToFinish => early.finish[s] - edge.lag_days - early.start[i],
                }
            })
            .min()
            .unwrap_or(tf);

        total.push(tf);
        free.push(ff);
        critical.push(tf <= criticality_threshold);
    }

    Floats {
        total,
        free,
        critical,
    }
}

#[cfg(test)]
mod tests {
    use super::super::backward::backward_pass;
    use super::super::forward::forward_pass;
    use super::*;
    use crate::models::{Dependency, Task};

    fn classify_network(tasks: &[Task], horizon: i64, threshold: i64) -> Floats {
        let graph = DependencyGraph::build(tasks).unwrap();
        let early = forward_pass(tasks, &graph, None, &mut Vec::new());
        let late = backward_pass(tasks, &graph, horizon, None);
        classify(&graph, &early, &late, threshold)
    }

    #[test]
    fn test_chain_all_critical_at_derived_horizon() {
        let tasks = vec![
            Task::new("A").with_duration(5),
            Task::new("B").with_duration(3).depends_on("A"),
            Task::new("C")
                .with_duration(2)
                .with_dependency(Dependency::new("B").with_lag(2)),
        ];
        let floats = classify_network(&tasks, 12, 0);

        assert_eq!(floats.total, vec![0, 0, 0]);
        assert_eq!(floats.free, vec![0, 0, 0]);
        assert!(floats.critical.iter().all(|&c| c));
    }

    #[test]
    fn test_parallel_branch_has_float() {
        // A(5) and B(2) both feed C(1): B floats 3 days.
        let tasks = vec![
            Task::new("A").with_duration(5),
            Task::new("B").with_duration(2),
            Task::new("C").with_duration(1).depends_on("A").depends_on("B"),
        ];
        let floats = classify_network(&tasks, 6, 0);

        assert_eq!(floats.total, vec![0, 3, 0]);
        assert_eq!(floats.free, vec![0, 3, 0]);
        assert_eq!(floats.critical, vec![true, false, true]);
    }

    #[test]
    fn test_free_float_bounded_by_next_successor() {
        // A → B(starts at 5 via other pred) : A finishes at 2, free float 3,
        // but total float larger if horizon is loose.
        let tasks = vec![
            Task::new("A").with_duration(2),
            Task::new("X").with_duration(5),
            Task::new("B").with_duration(1).depends_on("A").depends_on("X"),
        ];
        let floats = classify_network(&tasks, 10, 0);
        // B: es 5, ls 9 → tf 4. A: free float = 5 - 0 - 2 = 3; total = ls - es.
        assert_eq!(floats.free[0], 3);
        assert_eq!(floats.total[0], 7);
    }

    #[test]
    fn test_threshold_widens_critical_set() {
        let tasks = vec![
            Task::new("A").with_duration(5),
            Task::new("B").with_duration(4),
            Task::new("C").with_duration(1).depends_on("A").depends_on("B"),
        ];
        let strict = classify_network(&tasks, 6, 0);
        assert_eq!(strict.critical, vec![true, false, true]);

        let tolerant = classify_network(&tasks, 6, 1);
        assert_eq!(tolerant.critical, vec![true, true, true]);
    }

    #[test]
    fn test_negative_float_under_tight_horizon() {
        let tasks = vec![Task::new("A").with_duration(5)];
        let floats = classify_network(&tasks, 3, 0);
        assert_eq!(floats.total, vec![-2]);
        assert!(floats.critical[0]);
    }
}
