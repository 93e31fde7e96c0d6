//! HTTP error response mapping.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use corral_domain::error::CorralError;

/// Maps [`CorralError`] to a plain-text HTTP response with the matching
/// status code.
#[derive(Debug)]
pub struct ApiError(CorralError);

impl From<CorralError> for ApiError {
    fn from(err: CorralError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            CorralError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            CorralError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            CorralError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            message,
        )
            .into_response()
    }
}
