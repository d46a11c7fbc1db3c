// Authentication error types

use thiserror::Error;

/// Errors raised by credential and token handling.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0}")]
    MissingAuthorization(String),

    #[error("{0}")]
    MalformedAuthorization(String),

    #[error("{0}")]
    InvalidCredentials(String),

    #[error("token has expired")]
    TokenExpired,

    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token is missing the {0} claim")]
    MissingClaim(&'static str),

    #[error("password hashing failed: {0}")]
    HashingError(String),
}

pub type AuthResult<T> = Result<T, AuthError>;
