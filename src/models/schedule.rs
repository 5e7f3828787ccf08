//! Computed schedule result types.
//!
//! The engine never mutates the caller's task records; every computed field
//! comes back in a [`ScheduleResult`] keyed by task ID, together with the
//! diagnostic battery output and any non-fatal warnings.
//!
//! # Date Convention
//! Start dates are inclusive and finish dates are exclusive: a five-day task
//! starting Monday has its finish on the next Monday (half-open interval,
//! the same convention the calendar uses for counting).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::diagnostics::DiagnosticResult;

/// Computed dates and floats for one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// Task identifier.
    pub task_id: String,
    /// Earliest date the task can start.
    pub early_start: NaiveDate,
    /// Earliest date the task can be finished (exclusive).
    pub early_finish: NaiveDate,
    /// Latest date the task can start without delaying the project finish.
    pub late_start: NaiveDate,
    /// Latest date the task can finish without delaying the project finish (exclusive).
    pub late_finish: NaiveDate,
    /// Working days the task can slip without delaying the project finish.
    pub total_float: i64,
    /// Working days the task can slip without delaying any successor.
    pub free_float: i64,
    /// Whether the task is on the critical path.
    pub critical: bool,
}

/// Category of a non-fatal schedule warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// Lead/lag or constraint math would invert start/finish; clamped to zero length.
    NegativeDuration,
    /// A hard constraint conflicts with upstream logic; the constrained date won.
    ConstraintViolation,
    /// A non-milestone task has no predecessor and no successor.
    IsolatedTask,
}

/// A non-fatal issue surfaced alongside a still-usable schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleWarning {
    /// Warning category.
    pub kind: WarningKind,
    /// The affected task.
    pub task_id: String,
    /// Human-readable description.
    pub message: String,
}

impl ScheduleWarning {
    /// Creates a negative-duration warning.
    pub fn negative_duration(task_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::NegativeDuration,
            task_id: task_id.into(),
            message: message.into(),
        }
    }

    /// Creates a constraint-violation warning.
    pub fn constraint_violation(task_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::ConstraintViolation,
            task_id: task_id.into(),
            message: message.into(),
        }
    }

    /// Creates an isolated-task warning.
    pub fn isolated_task(task_id: impl Into<String>) -> Self {
        let task_id = task_id.into();
        let message = format!("task '{task_id}' has no predecessors and no successors");
        Self {
            kind: WarningKind::IsolatedTask,
            task_id,
            message,
        }
    }
}

/// Full output of one engine invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Computed fields per task, keyed by task ID.
    pub tasks: HashMap<String, ScheduledTask>,
    /// Project finish: the explicit target, or the latest early finish.
    pub project_finish: NaiveDate,
    /// DCMA diagnostic battery results, one per enabled check.
    pub diagnostics: Vec<DiagnosticResult>,
    /// Fraction of checks passed, scaled to 0–100.
    pub quality_score: f64,
    /// Actionable guidance derived from failing checks.
    pub recommendations: Vec<String>,
    /// Non-fatal issues encountered during computation.
    pub warnings: Vec<ScheduleWarning>,
}

impl ScheduleResult {
    /// Looks up the computed fields for a task.
    pub fn task(&self, task_id: &str) -> Option<&ScheduledTask> {
        self.tasks.get(task_id)
    }

    /// IDs of critical-path tasks, sorted for determinism.
    pub fn critical_tasks(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .tasks
            .values()
            .filter(|t| t.critical)
            .map(|t| t.task_id.as_str())
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Whether every enabled diagnostic check passed.
    pub fn is_healthy(&self) -> bool {
        self.diagnostics.iter().all(|d| d.passed)
    }

    /// Warnings of a given kind.
    pub fn warnings_of_kind(&self, kind: WarningKind) -> Vec<&ScheduleWarning> {
        self.warnings.iter().filter(|w| w.kind == kind).collect()
    }
}
