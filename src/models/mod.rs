//! Core data models for the attendance engine.
//!
//! This module contains all the domain models used throughout the engine.

mod date_range;
mod employee;
mod event;
mod report;
mod shift;

pub use date_range::DateRange;
pub use employee::Employee;
pub use event::{AttendanceEvent, EventKind};
pub use report::{MinuteTotals, Report, ReportDay, ReportEvent, WindowSummary};
pub use shift::{ShiftId, WorkWindow};
