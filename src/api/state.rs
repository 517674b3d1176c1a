//! Application state for the shift payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::PayrollConfig;

/// Shared application state.
///
/// Holds the payroll configuration and the location of the shift dataset
/// served by `GET /api/process-shifts`.
#[derive(Clone)]
pub struct AppState {
    /// The loaded payroll configuration.
    config: Arc<PayrollConfig>,
    /// Path of the shift dataset file.
    dataset_path: Arc<PathBuf>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: PayrollConfig, dataset_path: impl Into<PathBuf>) -> Self {
        Self {
            config: Arc::new(config),
            dataset_path: Arc::new(dataset_path.into()),
        }
    }

    /// Returns the payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the path of the shift dataset.
    pub fn dataset_path(&self) -> &Path {
        &self.dataset_path
    }
}
