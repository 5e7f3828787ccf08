//! Task and dependency models.
//!
//! A task is the schedulable unit of a CPM network. It owns the dependency
//! records that point at its predecessors; the engine never stores edges on
//! the predecessor side.
//!
//! # Time Representation
//! Durations and lags are integer *working days* under the project calendar.
//! Calendar dates only appear at the crate boundary; all internal pass
//! arithmetic uses working-day offsets from the project data date.
//!
//! # Reference
//! O'Brien & Plotnick (2015), "CPM in Construction Management", Ch. 4

use serde::{Deserialize, Serialize};

use super::DateConstraint;

/// Dependency relationship type between a predecessor and a successor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkType {
    /// Finish-to-start: successor starts after predecessor finishes.
    #[default]
    #[serde(rename = "FS")]
    FinishToStart,
    /// Start-to-start: successor starts after predecessor starts.
    #[serde(rename = "SS")]
    StartToStart,
    /// Finish-to-finish: successor finishes after predecessor finishes.
    #[serde(rename = "FF")]
    FinishToFinish,
    /// Start-to-finish: successor finishes after predecessor starts.
    #[serde(rename = "SF")]
    StartToFinish,
}

impl LinkType {
    /// Whether this is the preferred finish-to-start relationship.
    ///
    /// Excess non-FS logic is a network-quality smell flagged by the
    /// relationship-types diagnostic.
    pub fn is_finish_to_start(self) -> bool {
        self == LinkType::FinishToStart
    }
}

/// A directed dependency edge, owned by the successor task.
///
/// `predecessor_id` names the task whose dates constrain this one; `lag_days`
/// offsets the constraint (negative lag is a lead).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// ID of the predecessor task.
    pub predecessor_id: String,
    /// Relationship type.
    pub link: LinkType,
    /// Signed lag in working days. Negative = lead.
    pub lag_days: i64,
}

impl Dependency {
    /// Creates a finish-to-start dependency with no lag.
    pub fn new(predecessor_id: impl Into<String>) -> Self {
        Self {
            predecessor_id: predecessor_id.into(),
            link: LinkType::FinishToStart,
            lag_days: 0,
        }
    }

    /// Sets the relationship type.
    pub fn with_link(mut self, link: LinkType) -> Self {
        self.link = link;
        self
    }

    /// Sets the lag (negative for a lead).
    pub fn with_lag(mut self, lag_days: i64) -> Self {
        self.lag_days = lag_days;
        self
    }

    /// Whether the lag is negative (a lead).
    pub fn is_lead(&self) -> bool {
        self.lag_days < 0
    }
}

/// How a task's duration relates to assigned effort.
///
/// Carried for classification and serialization; the engine schedules from
/// `duration_days` alone (resource leveling is out of scope).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffortType {
    /// Duration is fixed; effort scales with assignment.
    #[default]
    FixedDuration,
    /// Total work is fixed; duration would scale with assignment.
    FixedWork,
    /// Units per time period are fixed.
    FixedUnitsPerTime,
}

/// Role of a task within the network.
///
/// Milestone kinds exempt a task from the corresponding side of the logic
/// diagnostic; summaries are exempt from the high-duration diagnostic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    /// Ordinary work task.
    #[default]
    Normal,
    /// Declared network entry point; needs no predecessor.
    StartMilestone,
    /// Declared network exit point; needs no successor.
    FinishMilestone,
    /// Roll-up of child tasks; excluded from duration diagnostics.
    Summary,
}

/// A schedulable unit in the CPM network.
///
/// Input-side fields only; computed dates and floats are returned separately
/// as [`ScheduledTask`](super::ScheduledTask) so the caller's records are
/// never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
    /// Hierarchical position, e.g. `"1.2.3"`.
    pub wbs_code: String,
    /// Human-readable name.
    pub name: String,
    /// Duration in working days (non-negative; milestones use 0).
    pub duration_days: i64,
    /// Duration/effort relationship.
    pub effort_type: EffortType,
    /// Planned resource-hours, when known.
    pub work_hours: Option<f64>,
    /// Network role.
    pub kind: TaskKind,
    /// Optional date constraint applied after the unconstrained passes.
    pub constraint: Option<DateConstraint>,
    /// Dependencies on predecessor tasks, owned by this successor.
    pub dependencies: Vec<Dependency>,
}

impl Task {
    /// Creates a task with the given ID and zero duration.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            wbs_code: String::new(),
            name: String::new(),
            duration_days: 0,
            effort_type: EffortType::FixedDuration,
            work_hours: None,
            kind: TaskKind::Normal,
            constraint: None,
            dependencies: Vec::new(),
        }
    }

    /// Sets the WBS code.
    pub fn with_wbs(mut self, wbs_code: impl Into<String>) -> Self {
        self.wbs_code = wbs_code.into();
        self
    }

    /// Sets the task name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the duration in working days.
    pub fn with_duration(mut self, duration_days: i64) -> Self {
        self.duration_days = duration_days;
        self
    }

    /// Sets the effort type.
    pub fn with_effort_type(mut self, effort_type: EffortType) -> Self {
        self.effort_type = effort_type;
        self
    }

    /// Sets planned resource-hours.
    pub fn with_work_hours(mut self, work_hours: f64) -> Self {
        self.work_hours = Some(work_hours);
        self
    }

    /// Sets the network role.
    pub fn with_kind(mut self, kind: TaskKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the date constraint.
    pub fn with_constraint(mut self, constraint: DateConstraint) -> Self {
        self.constraint = Some(constraint);
        self
    }

    /// Adds a dependency on a predecessor task.
    pub fn with_dependency(mut self, dependency: Dependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    /// Adds a plain finish-to-start dependency with no lag.
    pub fn depends_on(self, predecessor_id: impl Into<String>) -> Self {
        self.with_dependency(Dependency::new(predecessor_id))
    }

    /// Whether this task may legitimately have no predecessor.
    pub fn is_start_milestone(&self) -> bool {
        self.kind == TaskKind::StartMilestone
    }

    /// Whether this task may legitimately have no successor.
    pub fn is_finish_milestone(&self) -> bool {
        self.kind == TaskKind::FinishMilestone
    }

    /// Whether this task rolls up children rather than doing work itself.
    pub fn is_summary(&self) -> bool {
        self.kind == TaskKind::Summary
    }

    /// Whether this task carries a hard (override) date constraint.
    pub fn has_hard_constraint(&self) -> bool {
        self.constraint.as_ref().is_some_and(|c| c.is_hard())
    }
}
