//! Dependency graph validation and indexing.
//!
//! Builds the adjacency structure the pass engines iterate over. Edges are
//! stored on tasks in successor→predecessor direction; this module inverts
//! them into predecessor→successor adjacency, checks referential integrity,
//! and produces a topological order via Kahn's algorithm. Cycle detection is
//! a first-class, fatal step — caller data is never assumed acyclic.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use std::collections::{HashMap, VecDeque};

use crate::error::ScheduleError;
use crate::models::{LinkType, Task};

/// One directed edge of the network, in predecessor→successor direction.
///
/// Indices refer to positions in the task slice the graph was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Index of the predecessor task.
    pub predecessor: usize,
    /// Index of the successor task.
    pub successor: usize,
    /// Relationship type.
    pub link: LinkType,
    /// Signed lag in working days.
    pub lag_days: i64,
}

/// Validated, indexed view of a task network.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    index: HashMap<String, usize>,
    topo_order: Vec<usize>,
    predecessors: Vec<Vec<Edge>>,
    successors: Vec<Vec<Edge>>,
}

impl DependencyGraph {
    /// Validates the network and builds its adjacency structure.
    ///
    /// # Errors
    /// - [`ScheduleError::DuplicateTaskId`] when two tasks share an ID.
    /// - [`ScheduleError::InvalidDependency`] when a dependency references a
    ///   task that does not exist.
    /// - [`ScheduleError::CycleDetected`] when no topological order covers
    ///   every task.
    pub fn build(tasks: &[Task]) -> Result<Self, ScheduleError> {
        let mut index: HashMap<String, usize> = HashMap::with_capacity(tasks.len());
        for (i, task) in tasks.iter().enumerate() {
            if index.insert(task.id.clone(), i).is_some() {
                return Err(ScheduleError::DuplicateTaskId {
                    task_id: task.id.clone(),
                });
            }
        }

        let mut predecessors: Vec<Vec<Edge>> = vec![Vec::new(); tasks.len()];
        let mut successors: Vec<Vec<Edge>> = vec![Vec::new(); tasks.len()];

        for (succ, task) in tasks.iter().enumerate() {
            for dep in &task.dependencies {
                let Some(&pred) = index.get(dep.predecessor_id.as_str()) else {
                    return Err(ScheduleError::InvalidDependency {
                        successor_id: task.id.clone(),
                        predecessor_id: dep.predecessor_id.clone(),
                    });
                };
                let edge = Edge {
                    predecessor: pred,
                    successor: succ,
                    link: dep.link,
                    lag_days: dep.lag_days,
                };
                predecessors[succ].push(edge);
                successors[pred].push(edge);
            }
        }

        let topo_order = kahn_order(tasks, &predecessors, &successors)?;

        Ok(Self {
            index,
            topo_order,
            predecessors,
            successors,
        })
    }

    /// Number of tasks in the network.
    pub fn task_count(&self) -> usize {
        self.topo_order.len()
    }

    /// Index of a task by ID.
    pub fn index_of(&self, task_id: &str) -> Option<usize> {
        self.index.get(task_id).copied()
    }

    /// Topological order (predecessors before successors); the forward-pass
    /// iteration order. Its reverse is the backward-pass order.
    pub fn topo_order(&self) -> &[usize] {
        &self.topo_order
    }

    /// Incoming edges of a task (its predecessors).
    pub fn predecessors_of(&self, task: usize) -> &[Edge] {
        &self.predecessors[task]
    }

    /// Outgoing edges of a task (its successors).
    pub fn successors_of(&self, task: usize) -> &[Edge] {
        &self.successors[task]
    }

    /// Whether a task has no successors.
    pub fn is_terminal(&self, task: usize) -> bool {
        self.successors[task].is_empty()
    }

    /// Whether a task has neither predecessors nor successors.
    pub fn is_isolated(&self, task: usize) -> bool {
        self.predecessors[task].is_empty() && self.successors[task].is_empty()
    }
}

/// Kahn's algorithm over predecessor→successor edges.
///
/// Any task left out of the order is part of (or downstream of) a cycle.
fn kahn_order(
    tasks: &[Task],
    predecessors: &[Vec<Edge>],
    successors: &[Vec<Edge>],
) -> Result<Vec<usize>, ScheduleError> {
    let mut in_degree: Vec<usize> = predecessors.iter().map(Vec::len).collect();

    let mut queue: VecDeque<usize> = (0..tasks.len()).filter(|&i| in_degree[i] == 0).collect();
    let mut order = Vec::with_capacity(tasks.len());

    while let Some(i) = queue.pop_front() {
        order.push(i);
        for edge in &successors[i] {
            in_degree[edge.successor] -= 1;
            if in_degree[edge.successor] == 0 {
                queue.push_back(edge.successor);
            }
        }
    }

    if order.len() != tasks.len() {
        let mut task_ids: Vec<String> = (0..tasks.len())
            .filter(|&i| in_degree[i] > 0)
            .map(|i| tasks[i].id.clone())
            .collect();
        task_ids.sort_unstable();
        return Err(ScheduleError::CycleDetected { task_ids });
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Dependency;

    fn chain() -> Vec<Task> {
        vec![
            Task::new("A").with_duration(5),
            Task::new("B").with_duration(3).depends_on("A"),
            Task::new("C").with_duration(2).depends_on("B"),
        ]
    }

    #[test]
    fn test_topological_order_respects_edges() {
        let tasks = chain();
        let graph = DependencyGraph::build(&tasks).unwrap();
        let order = graph.topo_order();

        let pos = |id: &str| {
            let i = graph.index_of(id).unwrap();
            order.iter().position(|&x| x == i).unwrap()
        };
        assert!(pos("A") < pos("B"));
        assert!(pos("B") < pos("C"));
    }

    #[test]
    fn test_adjacency_both_directions() {
        let tasks = chain();
        let graph = DependencyGraph::build(&tasks).unwrap();
        let a = graph.index_of("A").unwrap();
        let b = graph.index_of("B").unwrap();

        assert_eq!(graph.predecessors_of(a).len(), 0);
        assert_eq!(graph.successors_of(a).len(), 1);
        assert_eq!(graph.successors_of(a)[0].successor, b);
        assert_eq!(graph.predecessors_of(b)[0].predecessor, a);
        assert!(graph.is_terminal(graph.index_of("C").unwrap()));
    }

    #[test]
    fn test_unknown_predecessor_rejected() {
        let tasks = vec![Task::new("A"), Task::new("B").depends_on("MISSING")];
        let err = DependencyGraph::build(&tasks).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::InvalidDependency {
                successor_id: "B".into(),
                predecessor_id: "MISSING".into(),
            }
        );
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let tasks = vec![Task::new("A"), Task::new("A")];
        let err = DependencyGraph::build(&tasks).unwrap_err();
        assert_eq!(err, ScheduleError::DuplicateTaskId { task_id: "A".into() });
    }

    #[test]
    fn test_direct_cycle_rejected() {
        let tasks = vec![Task::new("A").depends_on("B"), Task::new("B").depends_on("A")];
        let err = DependencyGraph::build(&tasks).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::CycleDetected {
                task_ids: vec!["A".into(), "B".into()],
            }
        );
    }

    #[test]
    fn test_transitive_cycle_rejected() {
        // A → B → C → A, with D safely upstream of nothing
        let tasks = vec![
            Task::new("A").depends_on("C"),
            Task::new("B").depends_on("A"),
            Task::new("C").depends_on("B"),
            Task::new("D"),
        ];
        let err = DependencyGraph::build(&tasks).unwrap_err();
        match err {
            ScheduleError::CycleDetected { task_ids } => {
                assert_eq!(task_ids, vec!["A", "B", "C"]);
            }
            other => panic!("expected CycleDetected, got {other:?}"),
        }
    }

    #[test]
    fn test_diamond_is_acyclic() {
        let tasks = vec![
            Task::new("A"),
            Task::new("B").depends_on("A"),
            Task::new("C").depends_on("A"),
            Task::new("D")
                .with_dependency(Dependency::new("B"))
                .with_dependency(Dependency::new("C")),
        ];
        let graph = DependencyGraph::build(&tasks).unwrap();
        assert_eq!(graph.task_count(), 4);
        let d = graph.index_of("D").unwrap();
        assert_eq!(graph.predecessors_of(d).len(), 2);
    }

    #[test]
    fn test_isolated_detection() {
        let tasks = vec![Task::new("A"), Task::new("B").depends_on("A"), Task::new("X")];
        let graph = DependencyGraph::build(&tasks).unwrap();
        assert!(graph.is_isolated(graph.index_of("X").unwrap()));
        assert!(!graph.is_isolated(graph.index_of("A").unwrap()));
    }
}
