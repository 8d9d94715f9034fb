//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine's
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

use super::types::{AppConfig, DisplayLabels, LabelsConfig, RosterConfig, ServiceConfig};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── labels.yaml     # Display labels for event kinds and shifts
/// ├── employees.yaml  # Employee roster with assigned shifts
/// └── service.yaml    # HTTP service settings
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Binding to {}", loader.service().bind_address);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    ///
    /// # Example
    ///
    /// ```no_run
    /// use attendance_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), attendance_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let labels = Self::load_yaml::<LabelsConfig>(&path.join("labels.yaml"))?;
        let roster = Self::load_yaml::<RosterConfig>(&path.join("employees.yaml"))?;
        let service = Self::load_yaml::<ServiceConfig>(&path.join("service.yaml"))?;

        Ok(Self::from_config(AppConfig::new(
            labels.labels,
            roster.employees,
            service,
        )))
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: AppConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the display labels.
    pub fn labels(&self) -> &DisplayLabels {
        self.config.labels()
    }

    /// Returns the employee roster.
    pub fn employees(&self) -> &[Employee] {
        self.config.employees()
    }

    /// Returns the service configuration.
    pub fn service(&self) -> &ServiceConfig {
        self.config.service()
    }
}
