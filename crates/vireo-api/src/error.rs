//! API error type and its HTTP mapping.
//!
//! Handlers return `Result<HttpResponse, ApiError>` and rely on the
//! `ResponseError` implementation for the status code and JSON body.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use vireo_auth::AuthError;
use vireo_commons::ValidationError;

/// Error type for all API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A draft failed its field checks.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request body or a path segment could not be parsed.
    #[error("{0}")]
    BadInput(String),

    /// Authentication failed or credentials were rejected.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The caller is authenticated but does not own the resource.
    #[error("{0}")]
    Forbidden(&'static str),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::BadInput(_) => StatusCode::BAD_REQUEST,
            // Hashing failures are server faults, not a caller problem.
            ApiError::Auth(AuthError::HashingError(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("request failed: {}", self);
        }

        HttpResponse::build(status).json(ErrorResponse::new(self.to_string()))
    }
}

/// Error response body returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    /// Create a new error response
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vireo_commons::ValidationError;

    #[test]
    fn test_status_codes() {
        let err = ApiError::Validation(ValidationError::Required("name"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = ApiError::BadInput("broken json".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = ApiError::Auth(AuthError::TokenExpired);
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);

        let err = ApiError::Auth(AuthError::InvalidCredentials("bad login".to_string()));
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);

        let err = ApiError::Forbidden("no touching");
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);

        let err = ApiError::NotFound("user");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err = ApiError::Internal("boom".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_hashing_failure_is_a_server_error() {
        let err = ApiError::Auth(AuthError::HashingError("thread died".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_message() {
        let err = ApiError::NotFound("publication");
        assert_eq!(err.to_string(), "publication not found");
    }
}
