//! Choosing the kind of the next clock event.

use crate::models::{AttendanceEvent, EventKind};

/// Returns the kind a new event should have, given the employee's events for
/// the current day.
///
/// The latest event by instant decides: no events means the employee is
/// arriving, otherwise the kind alternates from the latest one.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::next_event_kind;
/// use attendance_engine::models::EventKind;
///
/// assert_eq!(next_event_kind(&[]), EventKind::Entrance);
/// ```
pub fn next_event_kind(events_today: &[AttendanceEvent]) -> EventKind {
    events_today
        .iter()
        .max_by_key(|event| event.instant)
        .map_or(EventKind::Entrance, |last| last.kind.toggled())
}
