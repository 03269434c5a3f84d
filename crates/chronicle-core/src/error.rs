//! Core error types for chronicle-core.
//!
//! Classification itself never fails; these variants cover lookups by
//! identifier and structural validation of scenario content.

use crate::id::{ScenarioId, SourceId, TopicId};
use thiserror::Error;

/// Core errors produced by the chronicle-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A source node id was not found in the scenario.
    #[error("node not found: '{id}' in scenario '{scenario}'")]
    NodeNotFound { scenario: ScenarioId, id: SourceId },

    /// A topic id was not found in the scenario.
    #[error("topic not found: '{id}' in scenario '{scenario}'")]
    TopicNotFound { scenario: ScenarioId, id: TopicId },

    /// Two nodes (or a node and the event) share the same id.
    #[error("duplicate node id '{id}' in scenario '{scenario}'")]
    DuplicateNode { scenario: ScenarioId, id: SourceId },

    /// Two topics share the same id.
    #[error("duplicate topic id '{id}' in scenario '{scenario}'")]
    DuplicateTopic { scenario: ScenarioId, id: TopicId },

    /// A topic anchor names no vertex of the scenario graph.
    #[error("topic '{topic}' in scenario '{scenario}' anchors on unknown node '{anchor}'")]
    UnknownAnchor {
        scenario: ScenarioId,
        topic: TopicId,
        anchor: SourceId,
    },
}
