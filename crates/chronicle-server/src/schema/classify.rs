//! Ground-truth classification and explanation response types.

use chronicle_core::{ScenarioId, SourceId, TopicId};
use serde::Serialize;

/// Correct classification of a scenario under one topic.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyResponse {
    pub scenario_id: ScenarioId,
    pub topic_id: TopicId,
    pub topic_label: String,
    /// Sorted by id.
    pub primary_sources: Vec<SourceId>,
    /// Sorted by id.
    pub secondary_sources: Vec<SourceId>,
}

/// Long-form explanation of one node under one topic.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackResponse {
    pub scenario_id: ScenarioId,
    pub node_id: SourceId,
    pub topic_id: TopicId,
    /// Markdown text.
    pub feedback: String,
}
