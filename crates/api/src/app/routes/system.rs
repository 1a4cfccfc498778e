use axum::{http::StatusCode, response::Response};

use crate::app::errors;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Fallback for unmatched paths, so every error body has the same shape.
pub async fn not_found() -> Response {
    errors::json_error(StatusCode::NOT_FOUND, "Not Found")
}
