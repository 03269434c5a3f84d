//! HTTP/JSON API for the primary source trainer.
//!
//! Serves the scenario catalog, the ground-truth classification for a
//! scenario and topic, grading of learner submissions, per-source
//! explanations, and plain-text session reports. This crate contains the
//! server framework, API schema types, configuration, error handling, and
//! route definitions; the classification logic lives in `chronicle-check`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod report;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
