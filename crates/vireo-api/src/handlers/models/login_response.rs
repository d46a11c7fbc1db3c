//! Login response model

use serde::Serialize;

/// Login response body
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Id of the authenticated user
    pub id: u64,
    /// Signed bearer token for subsequent requests
    pub token: String,
}
