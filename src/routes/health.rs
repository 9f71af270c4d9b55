// src/routes/health.rs
//! Liveness endpoint for the AQI presentation adapter.
//!
//! Lets scripts and the integration tests confirm the service is up before
//! issuing real queries. Follows the same layout as the other route files:
//! - Internal to this file: the handler and its response type
//! - Exports to the gateway (`mod.rs`): a subrouter with the `/health` route

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use super::AppState;

/// JSON response body for the `/health` endpoint.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    readings: usize,
}

/// Handle `GET /health`.
///
/// Reports the service as reachable together with the number of readings
/// it holds. Does not require a user name.
async fn health(State(dataset): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        readings: dataset.readings().len(),
    })
}

/// Create a subrouter containing the `/health` route.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
