//! The [`ScenarioSource`] trait: where scenario documents come from.
//!
//! The catalog depends only on this contract, so content can be bundled in
//! the binary, read from disk, or built in memory by tests without touching
//! the classification code.

use chronicle_core::Scenario;

use crate::error::ContentError;

/// A provider of scenario documents.
pub trait ScenarioSource {
    /// Human-readable description used in logs and errors.
    fn describe(&self) -> String;

    /// Loads every scenario, in catalog order.
    fn load(&self) -> Result<Vec<Scenario>, ContentError>;
}

/// Scenarios already held in memory.
impl ScenarioSource for Vec<Scenario> {
    fn describe(&self) -> String {
        "in-memory scenarios".to_string()
    }

    fn load(&self) -> Result<Vec<Scenario>, ContentError> {
        Ok(self.clone())
    }
}

/// Parses one JSON scenario document.
pub fn parse_scenario(origin: &str, json: &str) -> Result<Scenario, ContentError> {
    serde_json::from_str(json).map_err(|source| ContentError::Parse {
        origin: origin.to_string(),
        source,
    })
}
