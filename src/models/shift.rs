//! Shift identifier and work window types.
//!
//! Shifts are organization-wide schedules selected by a short label. The label
//! decides which [`WorkWindow`]s apply to an employee on a given day; see
//! [`crate::calculation::resolve_windows`] for the schedule table itself.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The shift assigned to an employee.
///
/// Any label other than `A` or `B` resolves to [`ShiftId::Unknown`], which keeps
/// the accounting total over every input the store can hand back.
///
/// # Example
///
/// ```
/// use attendance_engine::models::ShiftId;
///
/// assert_eq!(ShiftId::from("A"), ShiftId::A);
/// assert_eq!(ShiftId::from("night"), ShiftId::Unknown);
/// assert_eq!(ShiftId::B.to_string(), "B");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum ShiftId {
    /// Morning shift: 06:00-10:00 and 11:00-15:00 UTC.
    A,
    /// Evening shift: 15:00-19:00 and 20:00-23:59:59 UTC.
    B,
    /// No shift assigned. Produces no work windows.
    #[default]
    Unknown,
}

impl ShiftId {
    /// Returns the canonical label for this shift.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftId::A => "A",
            ShiftId::B => "B",
            ShiftId::Unknown => "UNKNOWN",
        }
    }
}

impl From<&str> for ShiftId {
    fn from(label: &str) -> Self {
        match label.trim() {
            "A" => ShiftId::A,
            "B" => ShiftId::B,
            _ => ShiftId::Unknown,
        }
    }
}

impl From<String> for ShiftId {
    fn from(label: String) -> Self {
        ShiftId::from(label.as_str())
    }
}

impl From<ShiftId> for &'static str {
    fn from(shift: ShiftId) -> Self {
        shift.as_str()
    }
}

impl fmt::Display for ShiftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contiguous interval during which an employee is expected to be present.
///
/// Both ends are inclusive: an event stamped exactly at `end` still belongs to
/// the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkWindow {
    /// First instant of the window.
    pub start: DateTime<Utc>,
    /// Last instant of the window.
    pub end: DateTime<Utc>,
}

impl WorkWindow {
    /// Returns true if `instant` lies within `[start, end]`.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}
