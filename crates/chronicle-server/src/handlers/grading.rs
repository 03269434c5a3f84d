//! Grading handler.

use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::schema::grading::{GradeRequest, ScenarioResult};
use crate::state::AppState;

/// Grades a learner's classifications for one scenario.
///
/// `POST /api/grade`
pub async fn grade(
    State(state): State<AppState>,
    Json(req): Json<GradeRequest>,
) -> Result<Json<ScenarioResult>, ApiError> {
    let result = state.service.grade(&req)?;
    Ok(Json(result))
}
