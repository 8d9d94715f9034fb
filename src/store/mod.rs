//! Storage for attendance events and employee shift assignments.
//!
//! The [`AttendanceStore`] trait is the seam between the service layer and
//! whatever keeps events around. [`MemoryStore`] is the bundled in-process
//! implementation.

mod memory;

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{AttendanceEvent, ShiftId};

pub use memory::MemoryStore;

/// Persists attendance events and resolves employee shifts.
pub trait AttendanceStore: Send + Sync {
    /// Persists a new event and returns the stored copy.
    fn save(&self, event: AttendanceEvent) -> EngineResult<AttendanceEvent>;

    /// Looks up an event by id. Absence is `Ok(None)`, not an error.
    fn find_by_id(&self, id: &str) -> EngineResult<Option<AttendanceEvent>>;

    /// Returns the employee's events from `start_date` 00:00:00 through
    /// `end_date` 23:59:59 UTC, ordered by instant.
    fn events_in_range(
        &self,
        employee_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> EngineResult<Vec<AttendanceEvent>>;

    /// Returns the shift assigned to the employee, or [`ShiftId::Unknown`] if
    /// the employee is not on the roster.
    fn employee_shift(&self, employee_id: &str) -> EngineResult<ShiftId>;
}
