//! Functional-style handlers for the greeting use case.
//!
//! Two logical operations, `hello` and `secure_data`, routed here to
//! `/hello` and `/secure/data`. `hello` overlaps with the path-mapped
//! controller on purpose: both exercise the same port.

use axum::{extract::Extension, routing::get, Json, Router};

use crate::app::dto::GreetingResponse;
use crate::app::DynGreeter;

pub fn router() -> Router {
    Router::new()
        .route("/hello", get(hello))
        .route("/secure/data", get(secure_data))
}

pub async fn hello(Extension(greeter): Extension<DynGreeter>) -> Json<GreetingResponse> {
    Json(greeter.public_greeting().await.into())
}

pub async fn secure_data(Extension(greeter): Extension<DynGreeter>) -> Json<GreetingResponse> {
    Json(greeter.secure_greeting().await.into())
}
