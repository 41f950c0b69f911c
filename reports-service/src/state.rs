//! Application state management

use std::sync::Arc;

use crate::{config::Config, reports::ReportService, repository::ReportStore};

/// Application state shared across handlers
///
/// Generic over the store so handlers are monomorphized for the backend
/// chosen at startup instead of going through a trait object.
#[derive(Debug)]
pub struct AppState<S> {
    config: Arc<Config>,
    reports: ReportService<S>,
}

// Derived Clone would require `S: Clone` on the state itself
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            reports: self.reports.clone(),
        }
    }
}

impl<S: ReportStore> AppState<S> {
    /// Create state around an already connected store
    pub fn new(config: Config, store: S) -> Self {
        Self {
            config: Arc::new(config),
            reports: ReportService::new(store),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Report operations
    pub fn reports(&self) -> &ReportService<S> {
        &self.reports
    }

    /// The injected store
    pub fn store(&self) -> &S {
        self.reports.store()
    }
}
