//! Critical Path Method scheduling network engine.
//!
//! Computes early/late dates, total and free float, and the critical path
//! for a task network with typed dependency links (FS/SS/FF/SF), lags and
//! leads, working-day calendars, and date constraints. Every run also
//! evaluates a DCMA-14-style schedule quality battery and reports findings
//! alongside the computed dates.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `Dependency`, `Calendar`,
//!   `DateConstraint`, `ScheduleResult`, `ScheduledTask`
//! - **`graph`**: Network validation and topological ordering
//! - **`engine`**: The CPM pipeline — `CpmScheduler`, `ScheduleRequest`
//! - **`diagnostics`**: The schedule quality battery and recommendations
//! - **`error`**: Fatal input errors
//!
//! # Architecture
//!
//! The engine is a pure function over an immutable snapshot: tasks in,
//! `ScheduleResult` out. Structural problems (cycles, duplicate or unknown
//! IDs, an empty network) are fatal; everything else (constraint conflicts,
//! isolated tasks) degrades to warnings on the result.
//!
//! # References
//!
//! - Kelley & Walker (1959), "Critical-Path Planning and Scheduling"
//! - DCMA (2012), "14-Point Schedule Assessment"
//! - O'Brien & Plotnick (2015), "CPM in Construction Management"

pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod graph;
pub mod models;
