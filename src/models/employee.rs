//! Employee roster entry.

use serde::{Deserialize, Serialize};

use super::ShiftId;

/// An employee and the shift they are assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The assigned shift. Missing or unrecognised labels mean no shift.
    #[serde(default)]
    pub shift: ShiftId,
}
