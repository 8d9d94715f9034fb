//! Request types for the attendance API.
//!
//! This module defines the JSON body of `POST /attendances` and the query
//! string of `GET /reports/schedule`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::DateRange;
use crate::service::ReportQuery;

/// Request body for the `POST /attendances` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterEventRequest {
    /// The employee clocking in or out.
    pub employee_id: String,
}

/// Query parameters for the `GET /reports/schedule` endpoint.
///
/// Dates use the `YYYY-MM-DD` format; anything else is rejected before the
/// handler runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportQueryParams {
    /// The employee to report on.
    pub employee_id: String,
    /// First day of the report (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the report (inclusive).
    pub end_date: NaiveDate,
}

impl From<ReportQueryParams> for ReportQuery {
    fn from(params: ReportQueryParams) -> Self {
        ReportQuery {
            employee_id: params.employee_id,
            range: DateRange::new(params.start_date, params.end_date),
        }
    }
}
