//! Catalog browsing response types.

use serde::Serialize;

pub use chronicle_content::CatalogStats as StatsResponse;

/// Response for the health endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub message: String,
    pub version: String,
    /// Number of scenarios in the loaded catalog.
    pub scenarios_available: usize,
}
