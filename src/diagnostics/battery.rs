//! DCMA check battery and configuration.
//!
//! The battery is a fixed, enumerable set of checks: adding or removing one
//! is a compile-checked change, not an edit to a loosely-typed list. Each
//! check counts offenders over the completed network and passes when the
//! count stays within a fraction of the total task count.
//!
//! The six DCMA-14 metrics that need baseline, actuals, or resource
//! assignment data are outside this crate's input contract and are not part
//! of the battery.
//!
//! # Reference
//! DCMA (2012), "Earned Value Management System Program Analysis Pamphlet",
//! Ch. 14-point schedule assessment

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::graph::DependencyGraph;
use crate::models::{Task, TaskKind};

/// One schedule quality check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DcmaCheck {
    /// Tasks missing predecessors or successors. Start milestones are
    /// exempt on the predecessor side, finish milestones on the successor
    /// side, and summary tasks entirely: their dates roll up from children,
    /// so they carry no logic of their own.
    Logic,
    /// Dependencies with negative lag.
    Leads,
    /// Dependencies with lag beyond the configured threshold.
    Lags,
    /// Non-finish-to-start dependencies.
    RelationshipTypes,
    /// Tasks carrying a hard date constraint.
    HardConstraints,
    /// Tasks with total float beyond the configured threshold.
    HighFloat,
    /// Tasks with negative total float.
    NegativeFloat,
    /// Non-summary tasks with duration beyond the configured threshold.
    HighDuration,
}

impl DcmaCheck {
    /// Every check in battery order.
    pub const ALL: [DcmaCheck; 8] = [
        DcmaCheck::Logic,
        DcmaCheck::Leads,
        DcmaCheck::Lags,
        DcmaCheck::RelationshipTypes,
        DcmaCheck::HardConstraints,
        DcmaCheck::HighFloat,
        DcmaCheck::NegativeFloat,
        DcmaCheck::HighDuration,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            DcmaCheck::Logic => "Logic",
            DcmaCheck::Leads => "Leads",
            DcmaCheck::Lags => "Lags",
            DcmaCheck::RelationshipTypes => "Relationship Types",
            DcmaCheck::HardConstraints => "Hard Constraints",
            DcmaCheck::HighFloat => "High Float",
            DcmaCheck::NegativeFloat => "Negative Float",
            DcmaCheck::HighDuration => "High Duration",
        }
    }

    /// Published DCMA limit as a fraction of total task count.
    pub fn default_limit(self) -> f64 {
        match self {
            DcmaCheck::Logic => 0.05,
            DcmaCheck::Leads => 0.0,
            DcmaCheck::Lags => 0.05,
            DcmaCheck::RelationshipTypes => 0.10,
            DcmaCheck::HardConstraints => 0.05,
            DcmaCheck::HighFloat => 0.05,
            DcmaCheck::NegativeFloat => 0.0,
            DcmaCheck::HighDuration => 0.05,
        }
    }
}

/// Diagnostic thresholds and check selection.
///
/// The observed defaults (5-day lag, 44-day float and duration windows,
/// 0-day criticality) are configuration, not law: every value can be set
/// per project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticConfig {
    /// Total float at or below which a task is critical (working days).
    pub criticality_threshold_days: i64,
    /// Lag above which a dependency offends the Lags check (working days).
    pub lag_threshold_days: i64,
    /// Total float above which a task offends the High Float check.
    pub high_float_threshold_days: i64,
    /// Duration above which a task offends the High Duration check.
    pub high_duration_threshold_days: i64,
    /// Checks to run, in battery order. Defaults to all of them.
    pub enabled_checks: Vec<DcmaCheck>,
    /// Per-check overrides of the published limit fractions.
    pub limit_overrides: HashMap<DcmaCheck, f64>,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        Self {
            criticality_threshold_days: 0,
            lag_threshold_days: 5,
            high_float_threshold_days: 44,
            high_duration_threshold_days: 44,
            enabled_checks: DcmaCheck::ALL.to_vec(),
            limit_overrides: HashMap::new(),
        }
    }
}

impl DiagnosticConfig {
    /// Sets the criticality threshold.
    pub fn with_criticality_threshold(mut self, days: i64) -> Self {
        self.criticality_threshold_days = days;
        self
    }

    /// Sets the lag threshold.
    pub fn with_lag_threshold(mut self, days: i64) -> Self {
        self.lag_threshold_days = days;
        self
    }

    /// Sets the high-float threshold.
    pub fn with_high_float_threshold(mut self, days: i64) -> Self {
        self.high_float_threshold_days = days;
        self
    }

    /// Sets the high-duration threshold.
    pub fn with_high_duration_threshold(mut self, days: i64) -> Self {
        self.high_duration_threshold_days = days;
        self
    }

    /// Replaces the enabled check set.
    pub fn with_enabled_checks(mut self, checks: impl IntoIterator<Item = DcmaCheck>) -> Self {
        self.enabled_checks = checks.into_iter().collect();
        self
    }

    /// Overrides one check's limit fraction.
    pub fn with_limit(mut self, check: DcmaCheck, limit: f64) -> Self {
        self.limit_overrides.insert(check, limit);
        self
    }

    /// Effective limit fraction for a check.
    pub fn limit_for(&self, check: DcmaCheck) -> f64 {
        self.limit_overrides
            .get(&check)
            .copied()
            .unwrap_or_else(|| check.default_limit())
    }
}

/// Outcome of one check over one network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticResult {
    /// The check that ran.
    pub check: DcmaCheck,
    /// Display label of the check.
    pub label: String,
    /// Number of offending tasks or dependencies.
    pub count: usize,
    /// Allowed fraction of the total task count.
    pub limit: f64,
    /// Whether `count ≤ limit × total task count`.
    pub passed: bool,
}

/// Runs the enabled checks over a completed network.
///
/// `total_float` is aligned with `tasks` by index, as produced by the float
/// classifier.
pub fn evaluate(
    tasks: &[Task],
    graph: &DependencyGraph,
    total_float: &[i64],
    config: &DiagnosticConfig,
) -> Vec<DiagnosticResult> {
    config
        .enabled_checks
        .iter()
        .map(|&check| {
            let count = count_offenders(check, tasks, graph, total_float, config);
            let limit = config.limit_for(check);
            DiagnosticResult {
                check,
                label: check.label().to_string(),
                count,
                limit,
                passed: count as f64 <= limit * tasks.len() as f64,
            }
        })
        .collect()
}

/// Overall quality score: fraction of checks passed, scaled to 0–100.
pub fn quality_score(results: &[DiagnosticResult]) -> f64 {
    if results.is_empty() {
        return 100.0;
    }
    let passed = results.iter().filter(|r| r.passed).count();
    passed as f64 / results.len() as f64 * 100.0
}

fn count_offenders(
    check: DcmaCheck,
    tasks: &[Task],
    graph: &DependencyGraph,
    total_float: &[i64],
    config: &DiagnosticConfig,
) -> usize {
    match check {
        DcmaCheck::Logic => tasks
            .iter()
            .enumerate()
            .filter(|(i, t)| {
                if t.kind == TaskKind::Summary {
                    return false;
                }
                let missing_pred =
                    graph.predecessors_of(*i).is_empty() && !t.is_start_milestone();
                let missing_succ = graph.successors_of(*i).is_empty() && !t.is_finish_milestone();
                missing_pred || missing_succ
            })
            .count(),
        DcmaCheck::Leads => dependency_count(tasks, |d| d.lag_days < 0),
        DcmaCheck::Lags => dependency_count(tasks, |d| d.lag_days > config.lag_threshold_days),
        DcmaCheck::RelationshipTypes => {
            dependency_count(tasks, |d| !d.link.is_finish_to_start())
        }
        DcmaCheck::HardConstraints => tasks.iter().filter(|t| t.has_hard_constraint()).count(),
        DcmaCheck::HighFloat => total_float
            .iter()
            .filter(|&&tf| tf > config.high_float_threshold_days)
            .count(),
        DcmaCheck::NegativeFloat => total_float.iter().filter(|&&tf| tf < 0).count(),
        DcmaCheck::HighDuration => tasks
            .iter()
            .filter(|t| !t.is_summary() && t.duration_days > config.high_duration_threshold_days)
            .count(),
    }
}

fn dependency_count(tasks: &[Task], pred: impl Fn(&crate::models::Dependency) -> bool) -> usize {
    tasks
        .iter()
        .flat_map(|t| t.dependencies.iter())
        .filter(|d| pred(d))
        .count()
}
