//! Fatal errors for schedule computation.
//!
//! Only graph-structural problems abort a computation: the caller must fix
//! the network data before any computed date can be trusted. Date and
//! constraint anomalies are reported as [`ScheduleWarning`](crate::models::ScheduleWarning)
//! values on a still-complete result instead.

use thiserror::Error;

/// A fatal scheduling error. No schedule is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Zero tasks were supplied.
    #[error("no tasks supplied")]
    EmptyNetwork,

    /// Two tasks share the same ID.
    #[error("duplicate task ID '{task_id}'")]
    DuplicateTaskId {
        /// The ID that appears more than once.
        task_id: String,
    },

    /// A dependency references a task that does not exist.
    #[error("task '{successor_id}' depends on unknown task '{predecessor_id}'")]
    InvalidDependency {
        /// The task that owns the dangling dependency.
        successor_id: String,
        /// The referenced predecessor ID that could not be resolved.
        predecessor_id: String,
    },

    /// The dependency graph is not a DAG.
    #[error("dependency cycle involving {} task(s): {}", task_ids.len(), task_ids.join(", "))]
    CycleDetected {
        /// Tasks that could not be placed in a topological order, sorted by ID.
        task_ids: Vec<String>,
    },
}
