//! Application state for cafe service.

use std::sync::Arc;

use common::config::AppConfig;

use crate::catalog::CityCatalog;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub catalog: Arc<CityCatalog>,
}

impl AppState {
    /// Creates a new application state around an already loaded catalog.
    pub fn new(config: AppConfig, catalog: CityCatalog) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
        }
    }
}
