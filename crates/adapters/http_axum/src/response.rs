//! JSON success bodies.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Content type the fixture's clients expect on successful responses.
pub const X_JSON: &str = "application/x-json";

/// Serializes the wrapped value as JSON with an `application/x-json`
/// content type.
///
/// Works like [`axum::Json`] apart from the content type.
#[derive(Debug, Clone, Copy, Default)]
pub struct XJson<T>(pub T);

impl<T: Serialize> IntoResponse for XJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(body) => (
                [(header::CONTENT_TYPE, HeaderValue::from_static(X_JSON))],
                body,
            )
                .into_response(),
            Err(err) => {
                tracing::error!(error = %err, "unable to serialize response body");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(
                        header::CONTENT_TYPE,
                        HeaderValue::from_static("text/plain; charset=utf-8"),
                    )],
                    err.to_string(),
                )
                    .into_response()
            }
        }
    }
}
