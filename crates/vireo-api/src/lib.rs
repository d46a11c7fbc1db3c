// Vireo API Library
//
// This crate provides the REST API layer for Vireo,
// including HTTP handlers, routes, middleware, and request/response models.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use error::{ApiError, ErrorResponse};
pub use extractors::CurrentUser;
