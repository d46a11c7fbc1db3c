// User read model and registration/edit draft

use crate::validation::{is_valid_email, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which handler flow a draft is being prepared for.
///
/// Registration requires a password; editing profile data does not (password
/// changes go through their own endpoint).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrepareStage {
    Registration,
    Edit,
}

/// A user as returned to clients.
///
/// There is deliberately no password field on this type: the read projection
/// in the store never selects the hash, so it cannot leak through
/// serialization. Credential lookups use a store-internal type instead.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub nick: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// User-supplied profile fields, as submitted on registration and edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nick: String,
    #[serde(default)]
    pub email: String,
    /// Plaintext password; present on registration, ignored on edit.
    /// Never serialized back out.
    #[serde(default, skip_serializing)]
    pub password: String,
}

impl UserDraft {
    /// Validate and normalize the draft for the given stage.
    ///
    /// Presence checks run first, in field order (name, nick, email), then
    /// the email format check, then the password presence check when the
    /// stage is `Registration`. On success the text fields are trimmed.
    /// Hashing is not performed here; the registration handler hashes the
    /// password as a separate step after `prepare` succeeds.
    pub fn prepare(&mut self, stage: PrepareStage) -> Result<(), ValidationError> {
        self.validate(stage)?;
        self.normalize();
        Ok(())
    }

    fn validate(&self, stage: PrepareStage) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::Required("name"));
        }

        if self.nick.is_empty() {
            return Err(ValidationError::Required("nick"));
        }

        if self.email.is_empty() {
            return Err(ValidationError::Required("email"));
        }

        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }

        if stage == PrepareStage::Registration && self.password.is_empty() {
            return Err(ValidationError::Required("password"));
        }

        Ok(())
    }

    fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.nick = self.nick.trim().to_string();
        self.email = self.email.trim().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> UserDraft {
        UserDraft {
            name: "Ann".to_string(),
            nick: "ann1".to_string(),
            email: "a@x.com".to_string(),
            password: "secret123".to_string(),
        }
    }

    #[test]
    fn test_prepare_registration_valid() {
        let mut draft = draft();
        assert!(draft.prepare(PrepareStage::Registration).is_ok());
    }

    #[test]
    fn test_presence_checks_run_in_field_order() {
        let mut empty = UserDraft {
            name: String::new(),
            nick: String::new(),
            email: String::new(),
            password: String::new(),
        };
        assert_eq!(
            empty.prepare(PrepareStage::Registration),
            Err(ValidationError::Required("name"))
        );

        empty.name = "Ann".to_string();
        assert_eq!(
            empty.prepare(PrepareStage::Registration),
            Err(ValidationError::Required("nick"))
        );

        empty.nick = "ann1".to_string();
        assert_eq!(
            empty.prepare(PrepareStage::Registration),
            Err(ValidationError::Required("email"))
        );
    }

    #[test]
    fn test_email_format_checked_after_presence() {
        let mut draft = draft();
        draft.email = "not-an-email".to_string();
        assert_eq!(
            draft.prepare(PrepareStage::Registration),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_registration_requires_password() {
        let mut draft = draft();
        draft.password = String::new();
        assert_eq!(
            draft.prepare(PrepareStage::Registration),
            Err(ValidationError::Required("password"))
        );
    }

    #[test]
    fn test_edit_does_not_require_password() {
        let mut draft = draft();
        draft.password = String::new();
        assert!(draft.prepare(PrepareStage::Edit).is_ok());
    }

    #[test]
    fn test_password_length_is_not_capped() {
        let mut draft = draft();
        draft.password = "x".repeat(300);
        assert!(draft.prepare(PrepareStage::Registration).is_ok());
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        // The email stays clean here: the grammar is anchored, so a padded
        // address fails validation before normalize ever runs.
        let mut draft = UserDraft {
            name: "  Ann  ".to_string(),
            nick: " ann1 ".to_string(),
            email: "a@x.com".to_string(),
            password: "secret123".to_string(),
        };
        draft.prepare(PrepareStage::Registration).unwrap();
        assert_eq!(draft.name, "Ann");
        assert_eq!(draft.nick, "ann1");
    }

    #[test]
    fn test_padded_email_fails_validation() {
        let mut draft = draft();
        draft.email = " a@x.com ".to_string();
        assert_eq!(
            draft.prepare(PrepareStage::Registration),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_prepare_leaves_password_unhashed() {
        let mut draft = draft();
        draft.prepare(PrepareStage::Registration).unwrap();
        assert_eq!(draft.password, "secret123");
    }
}
