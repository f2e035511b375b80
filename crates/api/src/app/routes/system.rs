//! Health surface, kept under the prefix the route policy allow-lists.

use axum::{routing::get, Json, Router};

use crate::app::dto::HealthResponse;

pub fn router() -> Router {
    Router::new().route("/actuator/health", get(health))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "UP" })
}
