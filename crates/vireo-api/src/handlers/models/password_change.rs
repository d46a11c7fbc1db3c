//! Password change request model

use serde::Deserialize;

/// Password change request body
#[derive(Debug, Deserialize)]
pub struct PasswordChange {
    /// Password currently on record
    #[serde(default, rename = "old")]
    pub current: String,
    /// Replacement password; length is unchecked, matching registration
    #[serde(default, rename = "new")]
    pub replacement: String,
}
