//! Application state shared by all handlers.
//!
//! The scenario catalog is loaded once and never mutated, so [`AppState`]
//! shares the service through a plain `Arc` with no lock.

use std::sync::Arc;

use chronicle_content::{DirectorySource, EmbeddedSource, ScenarioCatalog};

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::service::TrainerService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TrainerService>,
}

impl AppState {
    /// Loads the catalog named by `config` (directory or embedded set).
    pub fn new(config: ServerConfig) -> Result<Self, ApiError> {
        let catalog = match &config.content_dir {
            Some(dir) => ScenarioCatalog::load(&DirectorySource::new(dir))?,
            None => ScenarioCatalog::load(&EmbeddedSource)?,
        };
        Ok(Self::with_catalog(catalog, config))
    }

    /// Wraps an already loaded catalog.
    pub fn with_catalog(catalog: ScenarioCatalog, config: ServerConfig) -> Self {
        let service = TrainerService::new(catalog, config.grading, config.instructor_email);
        AppState {
            service: Arc::new(service),
        }
    }

    /// State over the embedded scenarios with default settings (for testing).
    pub fn embedded() -> Result<Self, ApiError> {
        Self::new(ServerConfig::default())
    }
}
