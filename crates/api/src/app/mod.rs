//! HTTP application wiring (component assembly + Axum router).
//!
//! Layout:
//! - `routes/`: inbound adapters, one file per entry point
//! - `dto.rs`: response DTOs and mapping from domain types
//! - `middleware` (crate root): the access-control gate

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use hexamod_application::{GetGreetingUseCase, GreetingService};
use hexamod_auth::{CredentialRecord, CredentialStore, Role, RoutePolicy};

use crate::middleware::{self, GateState};

pub mod dto;
pub mod routes;

/// Shared handle to the greeting use case, as the adapters see it.
pub type DynGreeter = Arc<dyn GetGreetingUseCase>;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
///
/// All components are constructed explicitly here and handed to the router
/// as shared references; there is no container or reflection involved.
pub fn build_app() -> Router {
    let greeter: DynGreeter = Arc::new(GreetingService::new());

    // Single demonstration user; the store is read-only for the process
    // lifetime.
    let credentials = CredentialStore::single(CredentialRecord::new(
        "user",
        "password",
        vec![Role::new("USER")],
    ));

    let policy = RoutePolicy::new()
        .permit("/actuator/**")
        .permit("/public/**")
        .permit("/hello")
        .permit("/debug/ping");

    let gate = GateState {
        credentials: Arc::new(credentials),
        policy: Arc::new(policy),
    };

    routes::router().layer(
        ServiceBuilder::new()
            .layer(Extension(greeter))
            .layer(axum::middleware::from_fn_with_state(
                gate,
                middleware::access_control,
            )),
    )
}
