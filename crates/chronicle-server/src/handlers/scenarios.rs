//! Catalog handlers (health, list, get, stats).

use axum::extract::{Path, State};
use axum::Json;

use chronicle_core::Scenario;

use crate::error::ApiError;
use crate::schema::scenarios::{HealthResponse, StatsResponse};
use crate::state::AppState;

/// Health check.
///
/// `GET /`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(state.service.health())
}

/// Lists every scenario in catalog order.
///
/// `GET /api/scenarios`
pub async fn list_scenarios(State(state): State<AppState>) -> Json<Vec<Scenario>> {
    Json(state.service.list_scenarios())
}

/// Returns one scenario.
///
/// `GET /api/scenario/{scenario_id}`
pub async fn get_scenario(
    State(state): State<AppState>,
    Path(scenario_id): Path<String>,
) -> Result<Json<Scenario>, ApiError> {
    let scenario = state.service.get_scenario(&scenario_id)?;
    Ok(Json(scenario))
}

/// Catalog statistics.
///
/// `GET /api/stats`
pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.service.stats())
}
