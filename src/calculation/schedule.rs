//! Shift schedule resolution.
//!
//! This module turns a [`ShiftId`] and a calendar day into the concrete
//! [`WorkWindow`]s the employee is expected to be present for.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::models::{ShiftId, WorkWindow};

/// Seconds after midnight for each `(start, end)` pair of a shift.
const SHIFT_A_WINDOWS: [(i64, i64); 2] = [
    (6 * 3600, 10 * 3600),  // 06:00 - 10:00
    (11 * 3600, 15 * 3600), // 11:00 - 15:00
];

const SHIFT_B_WINDOWS: [(i64, i64); 2] = [
    (15 * 3600, 19 * 3600),                // 15:00 - 19:00
    (20 * 3600, 23 * 3600 + 59 * 60 + 59), // 20:00 - 23:59:59
];

fn window_offsets(shift: ShiftId) -> &'static [(i64, i64)] {
    match shift {
        ShiftId::A => &SHIFT_A_WINDOWS,
        ShiftId::B => &SHIFT_B_WINDOWS,
        ShiftId::Unknown => &[],
    }
}

/// Resolves the work windows for a shift on a given UTC calendar day.
///
/// Windows are returned in chronological order. [`ShiftId::Unknown`] has no
/// schedule and always resolves to an empty list.
///
/// # Arguments
///
/// * `shift` - The shift assigned to the employee
/// * `day` - The calendar day to anchor the windows to
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::resolve_windows;
/// use attendance_engine::models::ShiftId;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
/// let windows = resolve_windows(ShiftId::A, day);
///
/// assert_eq!(windows.len(), 2);
/// assert_eq!(windows[0].start.to_rfc3339(), "2025-09-01T06:00:00+00:00");
/// assert_eq!(windows[1].end.to_rfc3339(), "2025-09-01T15:00:00+00:00");
/// assert!(resolve_windows(ShiftId::Unknown, day).is_empty());
/// ```
pub fn resolve_windows(shift: ShiftId, day: NaiveDate) -> Vec<WorkWindow> {
    let midnight = day.and_time(NaiveTime::MIN).and_utc();

    window_offsets(shift)
        .iter()
        .map(|&(start, end)| WorkWindow {
            start: midnight + Duration::seconds(start),
            end: midnight + Duration::seconds(end),
        })
        .collect()
}
