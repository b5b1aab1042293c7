//! Request handlers for the API.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::core::color::describe;
use crate::core::sampler::{random_color, ThreadRngSource};
use crate::domain::model::{ColorResponse, HealthResponse};
use crate::server::AppState;

/// `GET /api/color`: one freshly sampled color, encoded three ways.
pub async fn generate_color() -> Json<ColorResponse> {
    let color = random_color(&mut ThreadRngSource::new());
    let response = describe(color);
    tracing::debug!("Generated color {}", response.hex);
    Json(response)
}

/// `GET /api/health`: liveness probe.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime().as_secs(),
    })
}
