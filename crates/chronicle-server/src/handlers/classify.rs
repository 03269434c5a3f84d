//! Ground-truth classification and per-node explanation handlers.

use axum::extract::{Path, State};
use axum::Json;

use crate::error::ApiError;
use crate::schema::classify::{ClassifyResponse, FeedbackResponse};
use crate::state::AppState;

/// Returns the correct classification for a scenario/topic pair.
///
/// `POST /api/classify/{scenario_id}/{topic_id}`
pub async fn classify(
    State(state): State<AppState>,
    Path((scenario_id, topic_id)): Path<(String, String)>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let response = state.service.classify(&scenario_id, &topic_id)?;
    Ok(Json(response))
}

/// Explains why a node is primary or secondary for a topic.
///
/// `GET /api/feedback/{scenario_id}/{node_id}/{topic_id}`
pub async fn feedback(
    State(state): State<AppState>,
    Path((scenario_id, node_id, topic_id)): Path<(String, String, String)>,
) -> Result<Json<FeedbackResponse>, ApiError> {
    let response = state.service.feedback(&scenario_id, &node_id, &topic_id)?;
    Ok(Json(response))
}
