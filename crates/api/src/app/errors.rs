use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use storefront_core::DomainError;

/// Error returned by handlers; rendered as `{"detail": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The request body was missing, not JSON, or the wrong shape.
    #[error("invalid request body: {0}")]
    InvalidBody(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Domain(DomainError::Conflict(_)) => StatusCode::BAD_REQUEST,
            ApiError::Domain(DomainError::Unauthorized(_)) => StatusCode::UNAUTHORIZED,
            ApiError::Domain(DomainError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Domain(DomainError::Validation(_)) | ApiError::InvalidBody(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            ApiError::Domain(e) => e.detail(),
            ApiError::InvalidBody(msg) => msg.as_str(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        json_error(self.status(), self.detail())
    }
}

pub fn json_error(status: StatusCode, detail: impl Into<String>) -> Response {
    (status, axum::Json(json!({ "detail": detail.into() }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_distinct_statuses() {
        let cases = [
            (DomainError::conflict("c"), StatusCode::BAD_REQUEST),
            (DomainError::unauthorized("u"), StatusCode::UNAUTHORIZED),
            (DomainError::not_found("n"), StatusCode::NOT_FOUND),
            (DomainError::validation("v"), StatusCode::UNPROCESSABLE_ENTITY),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn detail_is_the_bare_domain_message() {
        let err = ApiError::from(DomainError::conflict("Username already exists"));
        assert_eq!(err.detail(), "Username already exists");
    }
}
