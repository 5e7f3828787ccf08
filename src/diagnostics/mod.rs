//! DCMA-style schedule quality diagnostics.
//!
//! Runs a fixed battery of network-quality checks over a computed schedule
//! and turns the outcomes into an overall score and actionable guidance.
//!
//! # Battery
//!
//! | Check | Offenders | Limit |
//! |-------|-----------|-------|
//! | Logic | tasks missing predecessors/successors | 5% |
//! | Leads | negative-lag dependencies | 0% |
//! | Lags | lags above threshold (default 5d) | 5% |
//! | Relationship Types | non-FS dependencies | 10% |
//! | Hard Constraints | MustStartOn/MustFinishOn tasks | 5% |
//! | High Float | total float above threshold (default 44d) | 5% |
//! | Negative Float | total float below zero | 0% |
//! | High Duration | non-summary duration above threshold (default 44d) | 5% |
//!
//! # Reference
//! DCMA 14-point schedule assessment; Winter (2011), "The Programme
//! Management Improvement Framework"

mod battery;
mod recommend;

pub use battery::{evaluate, quality_score, DcmaCheck, DiagnosticConfig, DiagnosticResult};
pub use recommend::recommendations;
