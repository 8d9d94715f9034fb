//! Inclusive calendar date range.
//!
//! This module contains the [`DateRange`] type used to scope reports and store
//! queries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive range of calendar days.
///
/// A range whose start is after its end is valid and simply contains no days.
///
/// # Example
///
/// ```
/// use attendance_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange {
///     start_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 9, 3).unwrap(),
/// };
///
/// assert_eq!(range.day_count(), 3);
/// assert!(range.contains_date(NaiveDate::from_ymd_opt(2025, 9, 3).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// The first day of the range (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the range (inclusive).
    pub end_date: NaiveDate,
}

impl DateRange {
    /// Creates a range from its two ends.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Checks if a given date falls within this range.
    ///
    /// The check is inclusive of both start and end dates.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::DateRange;
    /// use chrono::NaiveDate;
    ///
    /// let range = DateRange::new(
    ///     NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2025, 9, 30).unwrap(),
    /// );
    ///
    /// assert!(range.contains_date(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap())); // start date
    /// assert!(range.contains_date(NaiveDate::from_ymd_opt(2025, 9, 15).unwrap())); // middle
    /// assert!(range.contains_date(NaiveDate::from_ymd_opt(2025, 9, 30).unwrap())); // end date
    /// assert!(!range.contains_date(NaiveDate::from_ymd_opt(2025, 8, 31).unwrap())); // before
    /// assert!(!range.contains_date(NaiveDate::from_ymd_opt(2025, 10, 1).unwrap())); // after
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Iterates every day from start to end, inclusive and ascending.
    ///
    /// Yields nothing when the start is after the end.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let end_date = self.end_date;
        self.start_date
            .iter_days()
            .take_while(move |day| *day <= end_date)
    }

    /// Returns the number of days covered, or 0 for an inverted range.
    pub fn day_count(&self) -> usize {
        let span = (self.end_date - self.start_date).num_days();
        usize::try_from(span + 1).unwrap_or(0)
    }
}
