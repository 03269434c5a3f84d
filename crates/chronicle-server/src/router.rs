//! Router assembly for the chronicle HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax. CORS is permissive since the
/// browser front end may be served from any origin.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::scenarios::health))
        // Catalog
        .route("/api/scenarios", get(handlers::scenarios::list_scenarios))
        .route(
            "/api/scenario/{scenario_id}",
            get(handlers::scenarios::get_scenario),
        )
        .route("/api/stats", get(handlers::scenarios::stats))
        // Classification
        .route(
            "/api/classify/{scenario_id}/{topic_id}",
            post(handlers::classify::classify),
        )
        .route(
            "/api/feedback/{scenario_id}/{node_id}/{topic_id}",
            get(handlers::classify::feedback),
        )
        // Grading and reports
        .route("/api/grade", post(handlers::grading::grade))
        .route(
            "/api/generate-report",
            post(handlers::report::generate_report),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
