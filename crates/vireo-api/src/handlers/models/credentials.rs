//! Login request model

use serde::Deserialize;

/// Login request body
#[derive(Debug, Deserialize)]
pub struct Credentials {
    /// Email address the account was registered under
    #[serde(default)]
    pub email: String,
    /// Password for authentication; length is unchecked, matching registration
    #[serde(default)]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_both_fields() {
        let creds: Credentials =
            serde_json::from_str(r#"{"email": "a@b.com", "password": "hunter2"}"#).unwrap();
        assert_eq!(creds.email, "a@b.com");
        assert_eq!(creds.password, "hunter2");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let creds: Credentials = serde_json::from_str("{}").unwrap();
        assert!(creds.email.is_empty());
        assert!(creds.password.is_empty());
    }

    #[test]
    fn test_password_length_is_unchecked() {
        // Any password that registers must stay usable at login, so the
        // wire model imposes no cap of its own.
        let body = format!(r#"{{"email": "a@b.com", "password": "{}"}}"#, "x".repeat(300));
        let creds: Credentials = serde_json::from_str(&body).unwrap();
        assert_eq!(creds.password.len(), 300);
    }
}
