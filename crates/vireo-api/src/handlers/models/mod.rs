//! Request and response models
//!
//! This module contains type-safe models for the API endpoints. The resource
//! bodies themselves (users, publications) live in `vireo-commons`.

mod credentials;
mod login_response;
mod password_change;
mod search_query;

pub use credentials::Credentials;
pub use login_response::LoginResponse;
pub use password_change::PasswordChange;
pub use search_query::SearchQuery;
