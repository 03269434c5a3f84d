//! Session report request/response types.

use serde::{Deserialize, Serialize};

use super::grading::ScenarioResult;

/// A learner's whole session: every graded scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSubmission {
    pub student_name: String,
    #[serde(default)]
    pub student_email: Option<String>,
    #[serde(default)]
    pub scenario_results: Vec<ScenarioResult>,
}

/// Plain-text report the learner can forward to the instructor.
#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    pub report: String,
    pub instructor_email: String,
}
