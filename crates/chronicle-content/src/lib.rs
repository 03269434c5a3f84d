//! Scenario content loading for chronicle.
//!
//! Scenarios are authored as JSON documents, one per file. A
//! [`ScenarioSource`] produces them, and [`ScenarioCatalog`] validates and
//! freezes them into the read-only collection the server shares for its
//! whole lifetime.
//!
//! # Modules
//!
//! - [`error`]: ContentError with all loading failure modes
//! - [`traits`]: the ScenarioSource trait
//! - [`embedded`]: the scenario set compiled into the binary
//! - [`directory`]: scenarios read from a directory of JSON files
//! - [`catalog`]: the immutable, insertion-ordered catalog

pub mod catalog;
pub mod directory;
pub mod embedded;
pub mod error;
pub mod traits;

// Re-export key types for ergonomic use.
pub use catalog::{CatalogStats, ScenarioCatalog};
pub use directory::DirectorySource;
pub use embedded::EmbeddedSource;
pub use error::ContentError;
pub use traits::ScenarioSource;
