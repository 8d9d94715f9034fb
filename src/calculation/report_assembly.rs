//! Report assembly.
//!
//! This module drives schedule resolution, grouping and window accounting
//! across every day of a date range and produces the final [`Report`].

use crate::config::DisplayLabels;
use crate::models::{
    AttendanceEvent, DateRange, MinuteTotals, Report, ReportDay, ReportEvent, ShiftId,
    WindowSummary,
};

use super::grouping::group_by_day;
use super::schedule::resolve_windows;
use super::window_accounting::account_window;

/// Builds the lateness and idle report for one employee.
///
/// One [`ReportDay`] is produced for every calendar day of `range`, in
/// ascending order, including days with no events. An inverted range yields
/// no days and zero totals. Events are not filtered by `range`; events on days
/// outside it are simply never looked at.
///
/// # Arguments
///
/// * `employee_id` - The employee the report is for
/// * `range` - The inclusive date range to report on
/// * `shift` - The employee's assigned shift
/// * `events` - The employee's events, in any order
/// * `labels` - Display labels for shift names and event kinds
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::build_report;
/// use attendance_engine::config::DisplayLabels;
/// use attendance_engine::models::{AttendanceEvent, DateRange, EventKind, ShiftId};
/// use chrono::{DateTime, NaiveDate, Utc};
///
/// let events = vec![AttendanceEvent {
///     id: "evt_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     instant: DateTime::parse_from_rfc3339("2025-09-01T06:15:00Z")
///         .unwrap()
///         .with_timezone(&Utc),
///     kind: EventKind::Entrance,
/// }];
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 9, 2).unwrap(),
/// );
///
/// let report = build_report("emp_001", range, ShiftId::A, &events, &DisplayLabels::default());
///
/// assert_eq!(report.days.len(), 2);
/// assert_eq!(report.totals.minutes_late, 15);
/// assert_eq!(report.days[0].shift, "Turno A");
/// assert_eq!(report.days[0].events[0].kind, "ENTRADA");
/// ```
pub fn build_report(
    employee_id: &str,
    range: DateRange,
    shift: ShiftId,
    events: &[AttendanceEvent],
    labels: &DisplayLabels,
) -> Report {
    let buckets = group_by_day(events);
    let shift_label = labels.shift_label(shift);

    let mut days = Vec::with_capacity(range.day_count());
    let mut totals = MinuteTotals::ZERO;

    for date in range.days() {
        let day_events = buckets.get(&date).map(Vec::as_slice).unwrap_or_default();

        let windows: Vec<WindowSummary> = resolve_windows(shift, date)
            .iter()
            .map(|window| WindowSummary {
                start: window.start,
                end: window.end,
                totals: account_window(window, day_events),
            })
            .collect();
        let day_totals: MinuteTotals = windows.iter().map(|w| w.totals).sum();
        totals += day_totals;

        days.push(ReportDay {
            date,
            shift: shift_label.to_string(),
            totals: day_totals,
            windows,
            events: day_events
                .iter()
                .map(|event| ReportEvent {
                    instant: event.instant,
                    kind: labels.kind_label(event.kind).to_string(),
                })
                .collect(),
        });
    }

    Report {
        employee_id: employee_id.to_string(),
        range,
        totals,
        days,
    }
}
