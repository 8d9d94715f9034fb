//! Lateness and idle time for a single work window.
//!
//! Lateness only looks at the first arrival inside the window. Idle time adds
//! up every departure that is followed by a return within the same window.

use chrono::{DateTime, Utc};

use crate::models::{AttendanceEvent, EventKind, MinuteTotals, WorkWindow};

/// Returns the whole minutes from `earlier` to `later`, or 0 if `later` is not
/// after `earlier`.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::whole_minutes_between;
/// use chrono::{DateTime, Utc};
///
/// let at = |s: &str| DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc);
///
/// assert_eq!(whole_minutes_between(at("2025-09-01T06:00:00Z"), at("2025-09-01T06:15:59Z")), 15);
/// assert_eq!(whole_minutes_between(at("2025-09-01T06:15:00Z"), at("2025-09-01T06:00:00Z")), 0);
/// ```
pub fn whole_minutes_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> u64 {
    u64::try_from((later - earlier).num_minutes()).unwrap_or(0)
}

/// Computes minutes late and minutes idle for one window.
///
/// Only events whose instant lies inside the window (both ends inclusive) are
/// considered. `events` is expected to be in chronological order, as produced
/// by [`super::group_by_day`]; ordering is not re-checked here.
///
/// # Arguments
///
/// * `window` - The work window to account for
/// * `events` - The events of the window's calendar day
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{account_window, resolve_windows};
/// use attendance_engine::models::{AttendanceEvent, EventKind, ShiftId};
/// use chrono::{DateTime, NaiveDate, Utc};
///
/// let at = |s: &str| DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc);
/// let event = |s: &str, kind| AttendanceEvent {
///     id: s.to_string(),
///     employee_id: "emp_001".to_string(),
///     instant: at(s),
///     kind,
/// };
///
/// let day = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
/// let morning = resolve_windows(ShiftId::A, day)[0];
/// let events = vec![
///     event("2025-09-01T06:00:00Z", EventKind::Entrance),
///     event("2025-09-01T07:00:00Z", EventKind::Exit),
///     event("2025-09-01T07:30:00Z", EventKind::Entrance),
/// ];
///
/// let totals = account_window(&morning, &events);
/// assert_eq!(totals.minutes_late, 0);
/// assert_eq!(totals.minutes_idle, 30);
/// ```
pub fn account_window(window: &WorkWindow, events: &[AttendanceEvent]) -> MinuteTotals {
    let in_window: Vec<&AttendanceEvent> = events
        .iter()
        .filter(|event| window.contains(event.instant))
        .collect();

    let minutes_late = in_window
        .iter()
        .find(|event| event.kind == EventKind::Entrance)
        .filter(|entrance| entrance.instant > window.start)
        .map_or(0, |entrance| {
            whole_minutes_between(window.start, entrance.instant)
        });

    let mut minutes_idle = 0;
    let mut pending_exit: Option<DateTime<Utc>> = None;
    for event in &in_window {
        match event.kind {
            EventKind::Exit => pending_exit = Some(event.instant),
            EventKind::Entrance => {
                if let Some(exit) = pending_exit.take() {
                    if exit >= window.start && event.instant <= window.end {
                        minutes_idle += whole_minutes_between(exit, event.instant);
                    }
                }
            }
        }
    }

    MinuteTotals {
        minutes_late,
        minutes_idle,
    }
}
