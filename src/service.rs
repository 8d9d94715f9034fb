//! Attendance service.
//!
//! [`AttendanceService`] sits between the HTTP layer and the store: it creates
//! new clock events, looks them up, and produces reports by feeding stored
//! events through [`crate::calculation::build_report`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::calculation::{build_report, next_event_kind};
use crate::config::DisplayLabels;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceEvent, DateRange, Report};
use crate::store::AttendanceStore;

/// What to build a report for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportQuery {
    /// The employee to report on.
    pub employee_id: String,
    /// The inclusive date range.
    pub range: DateRange,
}

/// Registers attendance events and generates reports.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use attendance_engine::config::DisplayLabels;
/// use attendance_engine::models::{Employee, EventKind, ShiftId};
/// use attendance_engine::service::AttendanceService;
/// use attendance_engine::store::MemoryStore;
///
/// let store = MemoryStore::with_roster(&[Employee {
///     id: "emp_001".to_string(),
///     shift: ShiftId::A,
/// }]);
/// let service = AttendanceService::new(Arc::new(store), DisplayLabels::default());
///
/// let first = service.register_event("emp_001")?;
/// assert_eq!(first.kind, EventKind::Entrance);
/// assert_eq!(service.find_event(&first.id)?, first);
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Clone)]
pub struct AttendanceService {
    store: Arc<dyn AttendanceStore>,
    labels: DisplayLabels,
}

impl AttendanceService {
    /// Creates a service over the given store.
    pub fn new(store: Arc<dyn AttendanceStore>, labels: DisplayLabels) -> Self {
        Self { store, labels }
    }

    /// Returns the labels used to render reports and events.
    pub fn labels(&self) -> &DisplayLabels {
        &self.labels
    }

    /// Records a clock event for the employee at the current time.
    pub fn register_event(&self, employee_id: &str) -> EngineResult<AttendanceEvent> {
        self.register_event_at(employee_id, Utc::now())
    }

    /// Records a clock event for the employee at `now`.
    ///
    /// The kind alternates with the employee's latest event on the same UTC
    /// day; the first event of a day is always an entrance.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` for a blank employee id, or a store error.
    pub fn register_event_at(
        &self,
        employee_id: &str,
        now: DateTime<Utc>,
    ) -> EngineResult<AttendanceEvent> {
        let employee_id = validate_employee_id(employee_id)?;

        let today = now.date_naive();
        let events_today = self.store.events_in_range(employee_id, today, today)?;
        let kind = next_event_kind(&events_today);
        debug!(
            employee_id = %employee_id,
            events_today = events_today.len(),
            kind = ?kind,
            "Resolved next event kind"
        );

        let event = self.store.save(AttendanceEvent {
            id: Uuid::new_v4().to_string(),
            employee_id: employee_id.to_string(),
            instant: now,
            kind,
        })?;

        info!(
            event_id = %event.id,
            employee_id = %event.employee_id,
            kind = ?event.kind,
            "Registered attendance event"
        );
        Ok(event)
    }

    /// Looks up an event by id.
    ///
    /// # Errors
    ///
    /// Returns `EventNotFound` when no event has that id.
    pub fn find_event(&self, id: &str) -> EngineResult<AttendanceEvent> {
        self.store
            .find_by_id(id)?
            .ok_or_else(|| EngineError::EventNotFound { id: id.to_string() })
    }

    /// Builds the lateness and idle report for the query.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` for a blank employee id, or a store error.
    pub fn generate_report(&self, query: &ReportQuery) -> EngineResult<Report> {
        let employee_id = validate_employee_id(&query.employee_id)?;

        let events = self.store.events_in_range(
            employee_id,
            query.range.start_date,
            query.range.end_date,
        )?;
        let shift = self.store.employee_shift(employee_id)?;

        let report = build_report(employee_id, query.range, shift, &events, &self.labels);
        info!(
            employee_id = %employee_id,
            shift = %shift,
            events = events.len(),
            days = report.days.len(),
            minutes_late = report.totals.minutes_late,
            minutes_idle = report.totals.minutes_idle,
            "Generated attendance report"
        );
        Ok(report)
    }
}

fn validate_employee_id(employee_id: &str) -> EngineResult<&str> {
    let trimmed = employee_id.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidRequest {
            field: "employee_id".to_string(),
            message: "must not be empty".to_string(),
        });
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, EventKind, ShiftId};
    use crate::store::MemoryStore;
    use chrono::NaiveDate;

    fn make_datetime(date_str: &str, time_str: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(&format!("{}T{}Z", date_str, time_str))
            .unwrap()
            .with_timezone(&Utc)
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_test_service() -> AttendanceService {
        let store = MemoryStore::with_roster(&[
            Employee {
                id: "emp_001".to_string(),
                shift: ShiftId::A,
            },
            Employee {
                id: "emp_002".to_string(),
                shift: ShiftId::B,
            },
        ]);
        AttendanceService::new(Arc::new(store), DisplayLabels::default())
    }

    fn query(employee_id: &str, start: &str, end: &str) -> ReportQuery {
        ReportQuery {
            employee_id: employee_id.to_string(),
            range: DateRange::new(make_date(start), make_date(end)),
        }
    }

    #[test]
    fn test_register_toggles_kind_within_a_day() {
        let service = create_test_service();

        let kinds: Vec<EventKind> = ["06:00:00", "07:00:00", "07:30:00", "10:00:00"]
            .iter()
            .map(|t| {
                service
                    .register_event_at("emp_001", make_datetime("2025-09-01", t))
                    .unwrap()
                    .kind
            })
            .collect();

        assert_eq!(
            kinds,
            vec![
                EventKind::Entrance,
                EventKind::Exit,
                EventKind::Entrance,
                EventKind::Exit,
            ]
        );
    }

    #[test]
    fn test_register_starts_each_day_with_entrance() {
        let service = create_test_service();

        service
            .register_event_at("emp_001", make_datetime("2025-09-01", "06:00:00"))
            .unwrap();
        let next_day = service
            .register_event_at("emp_001", make_datetime("2025-09-02", "06:00:00"))
            .unwrap();

        assert_eq!(next_day.kind, EventKind::Entrance);
    }

    #[test]
    fn test_register_toggles_per_employee() {
        let service = create_test_service();
        let at = make_datetime("2025-09-01", "06:00:00");

        assert_eq!(
            service.register_event_at("emp_001", at).unwrap().kind,
            EventKind::Entrance
        );
        assert_eq!(
            service.register_event_at("emp_002", at).unwrap().kind,
            EventKind::Entrance
        );
    }

    #[test]
    fn test_register_assigns_unique_ids() {
        let service = create_test_service();
        let a = service.register_event("emp_001").unwrap();
        let b = service.register_event("emp_001").unwrap();
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn test_register_rejects_blank_employee_id() {
        let service = create_test_service();

        match service.register_event("   ") {
            Err(EngineError::InvalidRequest { field, .. }) => assert_eq!(field, "employee_id"),
            other => panic!("Expected InvalidRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_find_event_round_trip() {
        let service = create_test_service();
        let event = service.register_event("emp_001").unwrap();

        assert_eq!(service.find_event(&event.id).unwrap(), event);
    }

    #[test]
    fn test_find_missing_event_is_not_found() {
        let service = create_test_service();

        match service.find_event("missing") {
            Err(EngineError::EventNotFound { id }) => assert_eq!(id, "missing"),
            other => panic!("Expected EventNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_generate_report_uses_roster_shift() {
        let service = create_test_service();
        for t in ["06:15:00", "07:00:00", "07:30:00"] {
            service
                .register_event_at("emp_001", make_datetime("2025-09-01", t))
                .unwrap();
        }

        let report = service
            .generate_report(&query("emp_001", "2025-09-01", "2025-09-01"))
            .unwrap();

        assert_eq!(report.employee_id, "emp_001");
        assert_eq!(report.days[0].shift, "Turno A");
        assert_eq!(report.totals.minutes_late, 15);
        assert_eq!(report.totals.minutes_idle, 30);
        assert!(report.is_reconciled());
    }

    #[test]
    fn test_generate_report_for_unrostered_employee() {
        let service = create_test_service();
        service
            .register_event_at("emp_999", make_datetime("2025-09-01", "09:00:00"))
            .unwrap();

        let report = service
            .generate_report(&query("emp_999", "2025-09-01", "2025-09-02"))
            .unwrap();

        assert_eq!(report.days.len(), 2);
        assert_eq!(report.days[0].shift, "Desconocido");
        assert_eq!(report.days[0].events.len(), 1);
        assert_eq!(report.totals.minutes_late, 0);
        assert_eq!(report.totals.minutes_idle, 0);
    }

    #[test]
    fn test_generate_report_rejects_blank_employee_id() {
        let service = create_test_service();
        let result = service.generate_report(&query("", "2025-09-01", "2025-09-01"));
        assert!(matches!(result, Err(EngineError::InvalidRequest { .. })));
    }
}
