//! Axum router assembly for the REST fixture.

use axum::Router;
use axum::http::{HeaderName, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use corral_app::ports::PonyRepository;

use crate::state::AppState;

/// Headers letting a test page on another origin call the fixture.
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("access-control-allow-origin", "*"),
    ("access-control-allow-methods", "GET, POST, PUT, DELETE"),
    ("access-control-allow-headers", "origin, accepts"),
];

/// Build the top-level axum [`Router`] for the REST fixture.
///
/// Unknown paths get an empty `404`. The [`CORS_HEADERS`] are set on every
/// response, errors included. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: PonyRepository + Send + Sync + 'static,
{
    let router = crate::api::routes().fallback(crate::api::not_found);

    CORS_HEADERS
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::overriding(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            ))
        })
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
