//! Daily event grouping.
//!
//! Splits a flat list of attendance events into per-day buckets keyed by the
//! UTC calendar date of each event.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::AttendanceEvent;

/// Groups events by UTC calendar day, each bucket sorted by instant.
///
/// The sort is stable, so events with identical instants keep their input
/// order. Days without events are absent from the map.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::group_by_day;
/// use attendance_engine::models::{AttendanceEvent, EventKind};
/// use chrono::{DateTime, NaiveDate, Utc};
///
/// let at = |s: &str| DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc);
/// let events = vec![
///     AttendanceEvent {
///         id: "2".to_string(),
///         employee_id: "emp_001".to_string(),
///         instant: at("2025-09-02T06:00:00Z"),
///         kind: EventKind::Entrance,
///     },
///     AttendanceEvent {
///         id: "1".to_string(),
///         employee_id: "emp_001".to_string(),
///         instant: at("2025-09-01T06:00:00Z"),
///         kind: EventKind::Entrance,
///     },
/// ];
///
/// let buckets = group_by_day(&events);
/// assert_eq!(buckets.len(), 2);
/// assert_eq!(buckets[&NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()][0].id, "1");
/// ```
pub fn group_by_day(events: &[AttendanceEvent]) -> BTreeMap<NaiveDate, Vec<AttendanceEvent>> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|event| event.instant);

    let mut buckets: BTreeMap<NaiveDate, Vec<AttendanceEvent>> = BTreeMap::new();
    for event in sorted {
        buckets.entry(event.date()).or_default().push(event);
    }
    buckets
}
