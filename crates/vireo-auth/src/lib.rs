// Vireo Authentication Library
// Provides password hashing, token issue/validation, and bearer-header parsing

pub mod bearer;
pub mod error;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use bearer::extract_bearer_token;
pub use error::{AuthError, AuthResult};
pub use password::{hash_password, verify_password};
pub use token::{extract_user_id, generate_token, validate_token, Claims};
