//! Error types for the attendance engine.
//!
//! The accounting functions in [`crate::calculation`] are total and never fail.
//! Everything that can go wrong lives at the boundaries: loading configuration,
//! talking to the store, and validating incoming requests.

use thiserror::Error;

/// The main error type for the attendance engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::EventNotFound {
///     id: "evt_001".to_string(),
/// };
/// assert_eq!(error.to_string(), "Attendance event not found: evt_001");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No attendance event exists with the requested id.
    #[error("Attendance event not found: {id}")]
    EventNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// A request field failed validation before reaching the engine.
    #[error("Invalid request field '{field}': {message}")]
    InvalidRequest {
        /// The offending field.
        field: String,
        /// What was wrong with it.
        message: String,
    },

    /// The attendance store could not complete an operation.
    #[error("Store error: {message}")]
    StoreError {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/labels.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/labels.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/labels.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/labels.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_event_not_found_displays_id() {
        let error = EngineError::EventNotFound {
            id: "abc".to_string(),
        };
        assert_eq!(error.to_string(), "Attendance event not found: abc");
    }

    #[test]
    fn test_invalid_request_displays_field_and_message() {
        let error = EngineError::InvalidRequest {
            field: "employee_id".to_string(),
            message: "must not be empty".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid request field 'employee_id': must not be empty"
        );
    }

    #[test]
    fn test_store_error_displays_message() {
        let error = EngineError::StoreError {
            message: "lock poisoned".to_string(),
        };
        assert_eq!(error.to_string(), "Store error: lock poisoned");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::EventNotFound {
                id: "missing".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
