//! Configuration types for the attendance engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::{Employee, EventKind, ShiftId};

/// Human-readable labels used when rendering reports and events.
///
/// Every field falls back to its default when omitted from `labels.yaml`.
///
/// # Example
///
/// ```
/// use attendance_engine::config::DisplayLabels;
/// use attendance_engine::models::{EventKind, ShiftId};
///
/// let labels = DisplayLabels::default();
/// assert_eq!(labels.kind_label(EventKind::Entrance), "ENTRADA");
/// assert_eq!(labels.shift_label(ShiftId::Unknown), "Desconocido");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayLabels {
    /// Label for [`EventKind::Entrance`].
    pub entrance: String,
    /// Label for [`EventKind::Exit`].
    pub exit: String,
    /// Name of [`ShiftId::A`].
    pub shift_a: String,
    /// Name of [`ShiftId::B`].
    pub shift_b: String,
    /// Shown when the employee has no known shift.
    pub unassigned: String,
}

impl Default for DisplayLabels {
    fn default() -> Self {
        Self {
            entrance: "ENTRADA".to_string(),
            exit: "SALIDA".to_string(),
            shift_a: "Turno A".to_string(),
            shift_b: "Turno B".to_string(),
            unassigned: "Desconocido".to_string(),
        }
    }
}

impl DisplayLabels {
    /// Returns the label for an event kind.
    pub fn kind_label(&self, kind: EventKind) -> &str {
        match kind {
            EventKind::Entrance => &self.entrance,
            EventKind::Exit => &self.exit,
        }
    }

    /// Returns the display name for a shift.
    pub fn shift_label(&self, shift: ShiftId) -> &str {
        match shift {
            ShiftId::A => &self.shift_a,
            ShiftId::B => &self.shift_b,
            ShiftId::Unknown => &self.unassigned,
        }
    }
}

/// Labels configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelsConfig {
    /// The display labels.
    pub labels: DisplayLabels,
}

/// Roster configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    /// Employees and their assigned shifts.
    #[serde(default)]
    pub employees: Vec<Employee>,
}

/// Service configuration from service.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    /// Socket address the HTTP server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

/// The complete configuration loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the various
/// YAML files in a configuration directory.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    labels: DisplayLabels,
    employees: Vec<Employee>,
    service: ServiceConfig,
}

impl AppConfig {
    /// Creates a new AppConfig from its component parts.
    pub fn new(labels: DisplayLabels, employees: Vec<Employee>, service: ServiceConfig) -> Self {
        Self {
            labels,
            employees,
            service,
        }
    }

    /// Returns the display labels.
    pub fn labels(&self) -> &DisplayLabels {
        &self.labels
    }

    /// Returns the employee roster.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns the service configuration.
    pub fn service(&self) -> &ServiceConfig {
        &self.service
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        let labels = DisplayLabels::default();
        assert_eq!(labels.kind_label(EventKind::Entrance), "ENTRADA");
        assert_eq!(labels.kind_label(EventKind::Exit), "SALIDA");
        assert_eq!(labels.shift_label(ShiftId::A), "Turno A");
        assert_eq!(labels.shift_label(ShiftId::B), "Turno B");
        assert_eq!(labels.shift_label(ShiftId::Unknown), "Desconocido");
    }

    #[test]
    fn test_partial_labels_fall_back_to_defaults() {
        let yaml = "labels:\n  entrance: IN\n  exit: OUT\n";
        let config: LabelsConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.labels.entrance, "IN");
        assert_eq!(config.labels.exit, "OUT");
        assert_eq!(config.labels.shift_a, "Turno A");
        assert_eq!(config.labels.unassigned, "Desconocido");
    }

    #[test]
    fn test_roster_parses_shifts() {
        let yaml = "employees:\n  - id: emp_001\n    shift: A\n  - id: emp_002\n    shift: night\n  - id: emp_003\n";
        let config: RosterConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.employees.len(), 3);
        assert_eq!(config.employees[0].shift, ShiftId::A);
        assert_eq!(config.employees[1].shift, ShiftId::Unknown);
        assert_eq!(config.employees[2].shift, ShiftId::Unknown);
    }

    #[test]
    fn test_service_config_default_bind_address() {
        let config: ServiceConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.bind_address, "127.0.0.1:3000");
    }
}
