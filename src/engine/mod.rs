//! CPM computation pipeline.
//!
//! One invocation runs the whole pipeline on an immutable snapshot: graph
//! build → forward pass → constraint re-propagation → backward pass → float
//! classification → diagnostics → recommendations. The engine is stateless
//! between calls, borrows the task slice read-only, and either returns a
//! complete [`ScheduleResult`] or fails with a
//! [`ScheduleError`](crate::error::ScheduleError). No partial results.
//!
//! # Algorithm
//!
//! Classic two-pass CPM over a validated DAG, in integer working-day
//! offsets from the data date: the forward pass maximizes early dates over
//! predecessor bounds, the backward pass minimizes late dates from the
//! project horizon, float is the gap between the two schedules.
//!
//! # References
//!
//! - Kelley & Walker (1959), "Critical-Path Planning and Scheduling"
//! - O'Brien & Plotnick (2015), "CPM in Construction Management"

mod backward;
mod constraints;
mod float;
mod forward;

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::diagnostics::{evaluate, quality_score, recommendations, DiagnosticConfig};
use crate::error::ScheduleError;
use crate::graph::DependencyGraph;
use crate::models::{Calendar, ScheduleResult, ScheduleWarning, ScheduledTask, Task};

use backward::backward_pass;
use constraints::ResolvedConstraints;
use float::classify;
use forward::forward_pass;

/// Input container for one schedule computation.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Tasks with embedded dependencies.
    pub tasks: Vec<Task>,
    /// The schedule's "as-of" anchor; tasks without predecessors start here.
    pub data_date: NaiveDate,
    /// Explicit target finish. When absent, the latest early finish over
    /// terminal tasks is used.
    pub finish_date: Option<NaiveDate>,
    /// Working-day calendar for all date arithmetic.
    pub calendar: Calendar,
    /// Diagnostic thresholds and check selection.
    pub config: DiagnosticConfig,
}

impl ScheduleRequest {
    /// Creates a request with the standard calendar and default diagnostics.
    pub fn new(tasks: Vec<Task>, data_date: NaiveDate) -> Self {
        Self {
            tasks,
            data_date,
            finish_date: None,
            calendar: Calendar::standard(),
            config: DiagnosticConfig::default(),
        }
    }

    /// Sets an explicit target finish date.
    pub fn with_finish_date(mut self, finish_date: NaiveDate) -> Self {
        self.finish_date = Some(finish_date);
        self
    }

    /// Sets the calendar.
    pub fn with_calendar(mut self, calendar: Calendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// Sets the diagnostic configuration.
    pub fn with_config(mut self, config: DiagnosticConfig) -> Self {
        self.config = config;
        self
    }
}

/// The CPM scheduling engine.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use cpm_engine::engine::CpmScheduler;
/// use cpm_engine::models::{Calendar, Task};
///
/// let tasks = vec![
///     Task::new("design").with_duration(5),
///     Task::new("build").with_duration(3).depends_on("design"),
/// ];
/// let data_date = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
///
/// let result = CpmScheduler::new()
///     .schedule(&tasks, data_date, &Calendar::standard())
///     .unwrap();
///
/// assert!(result.task("design").unwrap().critical);
/// assert_eq!(result.task("build").unwrap().total_float, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CpmScheduler {
    config: DiagnosticConfig,
}

impl CpmScheduler {
    /// Creates a scheduler with default diagnostics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the diagnostic configuration.
    pub fn with_config(mut self, config: DiagnosticConfig) -> Self {
        self.config = config;
        self
    }

    /// Computes the schedule with the project finish derived from the network.
    pub fn schedule(
        &self,
        tasks: &[Task],
        data_date: NaiveDate,
        calendar: &Calendar,
    ) -> Result<ScheduleResult, ScheduleError> {
        run(tasks, data_date, None, calendar, &self.config)
    }

    /// Computes the schedule against an explicit target finish date.
    pub fn schedule_with_target(
        &self,
        tasks: &[Task],
        data_date: NaiveDate,
        target_finish: NaiveDate,
        calendar: &Calendar,
    ) -> Result<ScheduleResult, ScheduleError> {
        run(tasks, data_date, Some(target_finish), calendar, &self.config)
    }

    /// Computes the schedule from a request (uses the request's config).
    pub fn schedule_request(&self, request: &ScheduleRequest) -> Result<ScheduleResult, ScheduleError> {
        run(
            &request.tasks,
            request.data_date,
            request.finish_date,
            &request.calendar,
            &request.config,
        )
    }
}

/// Runs the full pipeline on one snapshot.
fn run(
    tasks: &[Task],
    data_date: NaiveDate,
    finish_date: Option<NaiveDate>,
    calendar: &Calendar,
    config: &DiagnosticConfig,
) -> Result<ScheduleResult, ScheduleError> {
    if tasks.is_empty() {
        return Err(ScheduleError::EmptyNetwork);
    }

    let graph = DependencyGraph::build(tasks)?;
    debug!(tasks = tasks.len(), "dependency graph validated");

    let mut warnings: Vec<ScheduleWarning> = Vec::new();
    for (i, task) in tasks.iter().enumerate() {
        if graph.is_isolated(i) && !task.is_start_milestone() && !task.is_finish_milestone() {
            warnings.push(ScheduleWarning::isolated_task(&task.id));
        }
    }

    let unconstrained = forward_pass(tasks, &graph, None, &mut warnings);
    let resolved = ResolvedConstraints::resolve(tasks, calendar, data_date);
    let early = if resolved.affects_forward_pass() {
        trace!("re-propagating forward pass with date constraints");
        forward_pass(tasks, &graph, Some(&resolved), &mut warnings)
    } else {
        unconstrained
    };

    let anchor = calendar.roll_forward(data_date);
    // The derived horizon spans every task, not just terminal ones: a task
    // whose only successors are start-linked can finish after all of them.
    let horizon = match finish_date {
        Some(d) => calendar.working_days_between(anchor, calendar.roll_forward(d)),
        None => early.finish.iter().copied().max().unwrap_or(0),
    };
    debug!(horizon, derived = finish_date.is_none(), "running backward pass");

    let late = backward_pass(tasks, &graph, horizon, Some(&resolved));
    let floats = classify(&graph, &early, &late, config.criticality_threshold_days);

    let date_at = |offset: i64| calendar.add_working_days(anchor, offset);
    let scheduled = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            (
                task.id.clone(),
                ScheduledTask {
                    task_id: task.id.clone(),
                    early_start: date_at(early.start[i]),
                    early_finish: date_at(early.finish[i]),
                    late_start: date_at(late.start[i]),
                    late_finish: date_at(late.finish[i]),
                    total_float: floats.total[i],
                    free_float: floats.free[i],
                    critical: floats.critical[i],
                },
            )
        })
        .collect();

    let diagnostics = evaluate(tasks, &graph, &floats.total, config);
    let score = quality_score(&diagnostics);
    let guidance = recommendations(&diagnostics);
    trace!(score, warnings = warnings.len(), "pipeline complete");

    Ok(ScheduleResult {
        tasks: scheduled,
        project_finish: date_at(horizon),
        diagnostics,
        quality_score: score,
        recommendations: guidance,
        warnings,
    })
}
