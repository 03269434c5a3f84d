//! Grading request/response types.
//!
//! Labels arrive as plain strings and are parsed into
//! [`ClassificationLabel`] at the boundary: an empty string means the learner
//! skipped the node, anything outside the closed label set is rejected.

use chronicle_check::{Answer, NodeResult};
use chronicle_core::{ClassificationLabel, ScenarioId, SourceId, TopicId};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

fn anonymous() -> String {
    "Anonymous".to_string()
}

/// One submitted classification.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassificationInput {
    pub node_id: SourceId,
    /// "primary", "secondary", "dependent_on_topic", or "" for no answer.
    #[serde(default)]
    pub classification: String,
    #[serde(default)]
    pub justification: String,
}

impl ClassificationInput {
    /// Converts to a core [`Answer`], rejecting unknown labels.
    pub fn to_answer(&self) -> Result<Answer, ApiError> {
        let label = if self.classification.trim().is_empty() {
            None
        } else {
            Some(
                self.classification
                    .parse::<ClassificationLabel>()
                    .map_err(|e| ApiError::BadRequest(format!("node '{}': {}", self.node_id, e)))?,
            )
        };
        Ok(Answer {
            node_id: self.node_id.clone(),
            label,
            justification: self.justification.clone(),
        })
    }
}

/// Request to grade one scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct GradeRequest {
    pub scenario_id: ScenarioId,
    #[serde(default = "anonymous")]
    pub student_name: String,
    pub topic_id: TopicId,
    #[serde(default)]
    pub classifications: Vec<ClassificationInput>,
}

/// Graded result for one scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_id: ScenarioId,
    pub score: u32,
    pub max_score: u32,
    pub results: Vec<NodeResult>,
    pub topic_label: String,
}
