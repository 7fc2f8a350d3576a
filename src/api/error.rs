//! Mapping from pipeline errors to HTTP responses.
//!
//! Every [`TutorlyError`] surfaces as `500 {"detail": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::error::TutorlyError;

/// Handler error wrapper.
#[derive(Debug)]
pub struct ApiError(pub TutorlyError);

impl From<TutorlyError> for ApiError {
    fn from(err: TutorlyError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            TutorlyError::Generation {
                attempts,
                last_error,
            } => error!(attempts, last_error = %last_error, "Generation failed"),
            other => error!(error = %other, "Request failed"),
        }
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": self.0.to_string() })),
        )
            .into_response()
    }
}
