//! Session report handler.

use axum::extract::State;
use axum::Json;

use crate::schema::report::{ReportResponse, SessionSubmission};
use crate::state::AppState;

/// Renders a plain-text report of a whole session.
///
/// `POST /api/generate-report`
pub async fn generate_report(
    State(state): State<AppState>,
    Json(submission): Json<SessionSubmission>,
) -> Json<ReportResponse> {
    Json(state.service.generate_report(&submission))
}
