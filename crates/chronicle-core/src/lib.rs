//! Core data model for source-classification scenarios.
//!
//! A scenario is a small directed "citation graph": a historical event, the
//! surviving (extant) and lost documents that descend from it, and the
//! transmission edges between them. This crate owns the scenario types, the
//! label enumerations, and [`TransmissionGraph`], which provides graph
//! construction and hop-count shortest paths.

pub mod error;
pub mod graph;
pub mod id;
pub mod label;
pub mod scenario;

// Re-export commonly used types
pub use error::CoreError;
pub use graph::{Distance, TransmissionGraph};
pub use id::{ScenarioId, SourceId, TopicId};
pub use label::{ClassificationLabel, Verdict};
pub use scenario::{
    Difficulty, Edge, Event, Scenario, SourceKind, SourceNode, Topic, TransmissionStep,
    TransmissionType,
};
