//! HTTP handler modules for the chronicle API.
//!
//! Each sub-module implements thin handlers that parse requests, delegate to
//! [`TrainerService`](crate::service::TrainerService), and return JSON
//! responses. No classification logic lives in handlers.

pub mod classify;
pub mod grading;
pub mod report;
pub mod scenarios;
