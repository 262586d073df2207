//! Application state shared across HTTP handlers

use crate::config::ServiceInfo;

/// Shared application state
///
/// Read-only after startup; handlers never mutate it.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub service: ServiceInfo,
}

impl AppState {
    #[must_use]
    pub fn new(service: ServiceInfo) -> Self {
        Self { service }
    }
}
