//! Health Routes
//!
//! Whether the dashboard server is up, and which research endpoint and
//! page count it renders with.
//!
//! - GET /health/live - Dashboard process is accepting requests
//! - GET /health - Research endpoint, pages per load, uptime and version

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Always 200 while the dashboard server is running. Says nothing about
/// the research API.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Status with the research endpoint in use. The research API is not
/// contacted here; each page load reports its own failures.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        research_url: state.config.research_url.clone(),
        pages: state.config.pages,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
