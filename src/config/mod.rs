//! Configuration loading and management for the attendance engine.
//!
//! This module provides functionality to load the engine configuration from
//! YAML files: display labels, the employee roster and service settings.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Known employees: {}", config.employees().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, DisplayLabels, LabelsConfig, RosterConfig, ServiceConfig};
