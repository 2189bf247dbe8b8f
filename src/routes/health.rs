//! Health endpoint. Liveness, not readiness: a failed store probe downgrades
//! the status string but the endpoint still answers HTTP 200.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::service::HealthCheck;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Liveness report", body = HealthCheck)),
    tag = "health",
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthCheck> {
    Json(state.health.check().await)
}
