//! CPM scheduling domain models.
//!
//! Input types (`Task`, `Dependency`, `Calendar`, `DateConstraint`) describe
//! the network a caller submits; result types (`ScheduledTask`,
//! `ScheduleResult`, `ScheduleWarning`) carry everything the engine computes.
//! The engine borrows inputs read-only and returns a fresh result per call.

mod calendar;
mod constraint;
mod schedule;
mod task;

pub use calendar::Calendar;
pub use constraint::DateConstraint;
pub use schedule::{ScheduleResult, ScheduleWarning, ScheduledTask, WarningKind};
pub use task::{Dependency, EffortType, LinkType, Task, TaskKind};
