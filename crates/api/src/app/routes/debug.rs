//! Debug controller: a liveness probe that bypasses the greeting provider.

use axum::{routing::get, Json, Router};

use crate::app::dto::PingResponse;

pub fn router() -> Router {
    Router::new().route("/debug/ping", get(ping))
}

pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "alive",
        message: "RestController works!",
    })
}
