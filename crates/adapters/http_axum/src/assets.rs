//! Static test-asset server.
//!
//! Serves files below a root directory unmodified, read-only and
//! unauthenticated. Directories resolve to their `index.html`; no listings
//! are generated.

use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Page a browser should open to run the test suite.
pub const ENTRY_POINT: &str = "tests.html";

/// Build the asset [`Router`] serving files from `root`.
pub fn build(root: impl AsRef<Path>) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(root).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
}
