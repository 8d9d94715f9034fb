//! Application state for the attendance API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::service::AttendanceService;
use crate::store::{AttendanceStore, MemoryStore};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded configuration and the attendance service.
#[derive(Clone)]
pub struct AppState {
    /// The loaded configuration.
    config: Arc<ConfigLoader>,
    /// The service backing every endpoint.
    service: Arc<AttendanceService>,
}

impl AppState {
    /// Creates a new application state over the given store.
    pub fn new(config: ConfigLoader, store: Arc<dyn AttendanceStore>) -> Self {
        let service = AttendanceService::new(store, config.labels().clone());
        Self {
            config: Arc::new(config),
            service: Arc::new(service),
        }
    }

    /// Creates a new application state backed by a [`MemoryStore`] seeded
    /// with the configured roster.
    pub fn with_memory_store(config: ConfigLoader) -> Self {
        let store = MemoryStore::with_roster(config.employees());
        Self::new(config, Arc::new(store))
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the attendance service.
    pub fn service(&self) -> &AttendanceService {
        &self.service
    }
}
