use axum::Router;

pub mod debug;
pub mod greeting;
pub mod public;
pub mod system;

/// Full route tree: every inbound adapter merged into one router.
///
/// The path-mapped controller and the functional `hello` handler both serve
/// the public greeting; the duplication preserves the two adapter styles.
pub fn router() -> Router {
    Router::new()
        .merge(public::router())
        .merge(greeting::router())
        .merge(debug::router())
        .merge(system::router())
}
