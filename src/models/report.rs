//! Report models for the attendance engine.
//!
//! This module contains the [`Report`] type and its per-day and per-window
//! breakdowns, as produced by [`crate::calculation::build_report`].

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::DateRange;

/// Minutes late and minutes idle, always whole and never negative.
///
/// # Example
///
/// ```
/// use attendance_engine::models::MinuteTotals;
///
/// let morning = MinuteTotals { minutes_late: 15, minutes_idle: 0 };
/// let afternoon = MinuteTotals { minutes_late: 0, minutes_idle: 30 };
/// let day: MinuteTotals = [morning, afternoon].into_iter().sum();
/// assert_eq!(day, MinuteTotals { minutes_late: 15, minutes_idle: 30 });
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinuteTotals {
    /// Whole minutes between a window start and the first late arrival.
    pub minutes_late: u64,
    /// Whole minutes spent out between a departure and the next arrival.
    pub minutes_idle: u64,
}

impl MinuteTotals {
    /// No lateness and no idle time.
    pub const ZERO: MinuteTotals = MinuteTotals {
        minutes_late: 0,
        minutes_idle: 0,
    };
}

impl Add for MinuteTotals {
    type Output = MinuteTotals;

    fn add(self, rhs: MinuteTotals) -> MinuteTotals {
        MinuteTotals {
            minutes_late: self.minutes_late + rhs.minutes_late,
            minutes_idle: self.minutes_idle + rhs.minutes_idle,
        }
    }
}

impl AddAssign for MinuteTotals {
    fn add_assign(&mut self, rhs: MinuteTotals) {
        *self = *self + rhs;
    }
}

impl Sum for MinuteTotals {
    fn sum<I: Iterator<Item = MinuteTotals>>(iter: I) -> MinuteTotals {
        iter.fold(MinuteTotals::ZERO, Add::add)
    }
}

/// What a single work window contributed to a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSummary {
    /// First instant of the window.
    pub start: DateTime<Utc>,
    /// Last instant of the window (inclusive).
    pub end: DateTime<Utc>,
    /// Lateness and idle time accounted to this window.
    #[serde(flatten)]
    pub totals: MinuteTotals,
}

/// An event as it appears in a report, with its kind rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEvent {
    /// When the event happened.
    pub instant: DateTime<Utc>,
    /// Display label for the event kind (e.g. "ENTRADA").
    pub kind: String,
}

/// One calendar day of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDay {
    /// The calendar day.
    pub date: NaiveDate,
    /// Display name of the employee's shift.
    pub shift: String,
    /// Lateness and idle time for the whole day.
    #[serde(flatten)]
    pub totals: MinuteTotals,
    /// Per-window breakdown of the day totals, in schedule order.
    pub windows: Vec<WindowSummary>,
    /// Every event recorded on this day, in chronological order.
    pub events: Vec<ReportEvent>,
}

/// The full lateness and idle report for one employee over a date range.
///
/// `days` holds exactly one entry per calendar day of `range`, including days
/// without any events, and `totals` is the sum of every day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// The employee the report is for.
    pub employee_id: String,
    /// The queried range (inclusive on both ends).
    pub range: DateRange,
    /// Grand totals across all days.
    pub totals: MinuteTotals,
    /// One entry per calendar day, ascending.
    pub days: Vec<ReportDay>,
}

impl Report {
    /// Returns true if the grand totals equal the sum of the per-day totals.
    pub fn is_reconciled(&self) -> bool {
        let day_sum: MinuteTotals = self.days.iter().map(|d| d.totals).sum();
        day_sum == self.totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn instant(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn totals(late: u64, idle: u64) -> MinuteTotals {
        MinuteTotals {
            minutes_late: late,
            minutes_idle: idle,
        }
    }

    fn create_sample_day(date: &str, late: u64, idle: u64) -> ReportDay {
        ReportDay {
            date: make_date(date),
            shift: "Turno A".to_string(),
            totals: totals(late, idle),
            windows: vec![],
            events: vec![],
        }
    }

    #[test]
    fn test_minute_totals_add() {
        assert_eq!(totals(1, 2) + totals(3, 4), totals(4, 6));
    }

    #[test]
    fn test_minute_totals_add_assign() {
        let mut running = MinuteTotals::ZERO;
        running += totals(15, 0);
        running += totals(0, 30);
        assert_eq!(running, totals(15, 30));
    }

    #[test]
    fn test_minute_totals_sum_of_nothing_is_zero() {
        let sum: MinuteTotals = std::iter::empty().sum();
        assert_eq!(sum, MinuteTotals::ZERO);
    }

    #[test]
    fn test_report_is_reconciled() {
        let report = Report {
            employee_id: "emp_001".to_string(),
            range: DateRange::new(make_date("2025-09-01"), make_date("2025-09-02")),
            totals: totals(15, 40),
            days: vec![
                create_sample_day("2025-09-01", 15, 10),
                create_sample_day("2025-09-02", 0, 30),
            ],
        };
        assert!(report.is_reconciled());
    }

    #[test]
    fn test_report_not_reconciled_when_totals_drift() {
        let report = Report {
            employee_id: "emp_001".to_string(),
            range: DateRange::new(make_date("2025-09-01"), make_date("2025-09-01")),
            totals: totals(16, 10),
            days: vec![create_sample_day("2025-09-01", 15, 10)],
        };
        assert!(!report.is_reconciled());
    }

    #[test]
    fn test_report_day_serialization_flattens_totals() {
        let day = ReportDay {
            date: make_date("2025-09-01"),
            shift: "Turno A".to_string(),
            totals: totals(15, 30),
            windows: vec![WindowSummary {
                start: instant("2025-09-01T06:00:00Z"),
                end: instant("2025-09-01T10:00:00Z"),
                totals: totals(15, 30),
            }],
            events: vec![ReportEvent {
                instant: instant("2025-09-01T06:15:00Z"),
                kind: "ENTRADA".to_string(),
            }],
        };

        let json = serde_json::to_string(&day).unwrap();
        assert!(json.contains("\"date\":\"2025-09-01\""));
        assert!(json.contains("\"shift\":\"Turno A\""));
        assert!(json.contains("\"minutes_late\":15"));
        assert!(json.contains("\"minutes_idle\":30"));
        assert!(json.contains("\"start\":\"2025-09-01T06:00:00Z\""));
        assert!(json.contains("\"instant\":\"2025-09-01T06:15:00Z\""));
        assert!(json.contains("\"kind\":\"ENTRADA\""));
        assert!(!json.contains("\"totals\""));
    }

    #[test]
    fn test_report_deserialization() {
        let json = r#"{
            "employee_id": "emp_001",
            "range": { "start_date": "2025-09-01", "end_date": "2025-09-01" },
            "totals": { "minutes_late": 0, "minutes_idle": 0 },
            "days": [
                {
                    "date": "2025-09-01",
                    "shift": "Desconocido",
                    "minutes_late": 0,
                    "minutes_idle": 0,
                    "windows": [],
                    "events": []
                }
            ]
        }"#;

        let report: Report = serde_json::from_str(json).unwrap();
        assert_eq!(report.employee_id, "emp_001");
        assert_eq!(report.days.len(), 1);
        assert_eq!(report.days[0].shift, "Desconocido");
        assert!(report.is_reconciled());
    }
}
