//! In-memory attendance store.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceEvent, Employee, ShiftId};

use super::AttendanceStore;

fn poisoned<T>(_: PoisonError<T>) -> EngineError {
    EngineError::StoreError {
        message: "attendance store lock poisoned".to_string(),
    }
}

/// An [`AttendanceStore`] that keeps everything in process memory.
///
/// Events are lost when the process exits. The roster is fixed at
/// construction time.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{Employee, ShiftId};
/// use attendance_engine::store::{AttendanceStore, MemoryStore};
///
/// let store = MemoryStore::with_roster(&[Employee {
///     id: "emp_001".to_string(),
///     shift: ShiftId::A,
/// }]);
///
/// assert_eq!(store.employee_shift("emp_001").unwrap(), ShiftId::A);
/// assert_eq!(store.employee_shift("emp_999").unwrap(), ShiftId::Unknown);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    events: RwLock<Vec<AttendanceEvent>>,
    roster: HashMap<String, ShiftId>,
}

impl MemoryStore {
    /// Creates an empty store with no employees.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store seeded with the given roster.
    pub fn with_roster(employees: &[Employee]) -> Self {
        Self {
            events: RwLock::new(Vec::new()),
            roster: employees
                .iter()
                .map(|employee| (employee.id.clone(), employee.shift))
                .collect(),
        }
    }

    /// Returns the number of stored events.
    pub fn len(&self) -> EngineResult<usize> {
        Ok(self.events.read().map_err(poisoned)?.len())
    }

    /// Returns true if no events have been stored.
    pub fn is_empty(&self) -> EngineResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl AttendanceStore for MemoryStore {
    fn save(&self, event: AttendanceEvent) -> EngineResult<AttendanceEvent> {
        let mut events = self.events.write().map_err(poisoned)?;
        events.push(event.clone());
        Ok(event)
    }

    fn find_by_id(&self, id: &str) -> EngineResult<Option<AttendanceEvent>> {
        let events = self.events.read().map_err(poisoned)?;
        Ok(events.iter().find(|event| event.id == id).cloned())
    }

    fn events_in_range(
        &self,
        employee_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> EngineResult<Vec<AttendanceEvent>> {
        let events = self.events.read().map_err(poisoned)?;

        let mut matching: Vec<AttendanceEvent> = events
            .iter()
            .filter(|event| event.employee_id == employee_id)
            .filter(|event| {
                let date = event.date();
                date >= start_date && date <= end_date
            })
            .cloned()
            .collect();
        matching.sort_by_key(|event| event.instant);

        Ok(matching)
    }

    fn employee_shift(&self, employee_id: &str) -> EngineResult<ShiftId> {
        Ok(self
            .roster
            .get(employee_id)
            .copied()
            .unwrap_or(ShiftId::Unknown))
    }
}
