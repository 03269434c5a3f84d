//! Binary entrypoint for the chronicle HTTP server.
//!
//! Reads configuration from environment variables (see [`ServerConfig`]):
//! - `CHRONICLE_HOST`: listen address (default: "0.0.0.0")
//! - `CHRONICLE_PORT`: listen port (default: "8000")
//! - `CHRONICLE_CONTENT_DIR`: directory of scenario JSON files (default: embedded set)
//! - `CHRONICLE_INSTRUCTOR_EMAIL`: address printed on session reports
//! - `CHRONICLE_CONTEMPORARY_YEARS`, `CHRONICLE_LONG_AFTER_YEARS`: grading thresholds

use chronicle_server::config::ServerConfig;
use chronicle_server::router::build_router;
use chronicle_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env().expect("Invalid server configuration");
    let addr = config.bind_address();

    let state = AppState::new(config).expect("Failed to initialize application state");
    let app = build_router(state);

    tracing::info!("chronicle server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
