//! Content error types for chronicle-content.

use std::path::PathBuf;

use chronicle_core::{CoreError, ScenarioId};
use thiserror::Error;

/// Errors produced while loading scenario content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Reading a file or directory failed.
    #[error("i/o error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A scenario document is not valid JSON for the scenario model.
    #[error("failed to parse scenario document '{origin}': {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// A scenario parsed but failed structural validation.
    #[error("invalid scenario: {0}")]
    Invalid(#[from] CoreError),

    /// Two documents declare the same scenario id.
    #[error("duplicate scenario id: '{0}'")]
    DuplicateScenario(ScenarioId),

    /// The source produced no scenarios at all.
    #[error("no scenarios found in {0}")]
    Empty(String),
}
