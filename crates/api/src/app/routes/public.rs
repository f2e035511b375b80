//! Path-mapped controller for the public greeting.

use axum::{extract::Extension, routing::get, Json, Router};

use crate::app::dto::GreetingResponse;
use crate::app::DynGreeter;

pub fn router() -> Router {
    Router::new().route("/public/hello", get(hello))
}

pub async fn hello(Extension(greeter): Extension<DynGreeter>) -> Json<GreetingResponse> {
    Json(greeter.public_greeting().await.into())
}
