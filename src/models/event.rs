//! Attendance event model.
//!
//! An [`AttendanceEvent`] is one clock-in or clock-out. Events are created by
//! the service layer and never mutated afterwards.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Whether an event marks the employee arriving or leaving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventKind {
    /// The employee clocked in.
    Entrance,
    /// The employee clocked out.
    Exit,
}

impl EventKind {
    /// Returns the kind that follows this one when toggling clock-ins and clock-outs.
    pub fn toggled(self) -> Self {
        match self {
            EventKind::Entrance => EventKind::Exit,
            EventKind::Exit => EventKind::Entrance,
        }
    }
}

/// A single clock-in or clock-out recorded for an employee.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{AttendanceEvent, EventKind};
/// use chrono::{DateTime, NaiveDate, Utc};
///
/// let event = AttendanceEvent {
///     id: "evt_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     instant: DateTime::parse_from_rfc3339("2025-09-01T06:15:00Z")
///         .unwrap()
///         .with_timezone(&Utc),
///     kind: EventKind::Entrance,
/// };
/// assert_eq!(event.date(), NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEvent {
    /// Unique identifier for the event.
    pub id: String,
    /// The employee the event belongs to.
    pub employee_id: String,
    /// When the event happened.
    pub instant: DateTime<Utc>,
    /// Arrival or departure.
    pub kind: EventKind,
}

impl AttendanceEvent {
    /// Returns the UTC calendar day the event falls on.
    pub fn date(&self) -> NaiveDate {
        self.instant.date_naive()
    }
}
