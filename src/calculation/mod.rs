//! Calculation logic for the attendance engine.
//!
//! This module contains the pure accounting functions: shift schedule
//! resolution, grouping events by day, per-window lateness and idle time,
//! report assembly, and choosing the kind of the next clock event.
//!
//! Nothing in here performs I/O or logs; identical inputs always produce
//! identical outputs.

mod grouping;
mod next_kind;
mod report_assembly;
mod schedule;
mod window_accounting;

pub use grouping::group_by_day;
pub use next_kind::next_event_kind;
pub use report_assembly::build_report;
pub use schedule::resolve_windows;
pub use window_accounting::{account_window, whole_minutes_between};
