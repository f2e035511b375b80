use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use hexamod_auth::{decode_basic, AccessRule, CredentialStore, RoutePolicy};

/// Immutable state shared by every evaluation of the gate.
#[derive(Clone)]
pub struct GateState {
    pub credentials: Arc<CredentialStore>,
    pub policy: Arc<RoutePolicy>,
}

/// Challenge sent whenever authentication is demanded and not satisfied.
const CHALLENGE: &str = "Basic realm=\"hexamod\"";

/// Access-control gate wrapping the whole router, 404 fallback included.
///
/// Every request is evaluated independently against the route policy; there
/// is no session state. Permitted paths pass straight through; everything
/// else must present basic credentials matching the store, or is answered
/// with a 401 challenge and an empty body before any handler runs.
pub async fn access_control(
    State(state): State<GateState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let path = req.uri().path().to_owned();

    if state.policy.evaluate(&path) == AccessRule::PermitAll {
        return next.run(req).await;
    }

    match verified_username(&state, req.headers()) {
        Some(username) => {
            tracing::debug!(%username, %path, "basic credentials verified");
            next.run(req).await
        }
        None => {
            tracing::debug!(%path, "rejecting request without valid credentials");
            unauthorized()
        }
    }
}

fn verified_username(state: &GateState, headers: &HeaderMap) -> Option<String> {
    let header = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let creds = decode_basic(header).ok()?;

    state
        .credentials
        .verify(&creds.username, &creds.password)
        .map(|record| record.username().to_string())
}

/// 401 with a `WWW-Authenticate` challenge and an empty body.
fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, CHALLENGE)],
    )
        .into_response()
}
