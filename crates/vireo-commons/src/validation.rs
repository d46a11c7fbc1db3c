// Field validation shared by the domain models

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Compiled email grammar (loaded once).
static EMAIL_GRAMMAR: OnceLock<Regex> = OnceLock::new();

/// Error naming the first field that failed a `prepare` pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required and cannot be blank")]
    Required(&'static str),
    #[error("the email address is invalid")]
    InvalidEmail,
}

/// Check a string against a conventional email address grammar.
///
/// One local part, one `@`, and a dotted domain of label characters. This is
/// a format check only; no deliverability probing.
pub fn is_valid_email(email: &str) -> bool {
    let grammar = EMAIL_GRAMMAR.get_or_init(|| {
        Regex::new(r"(?i)^[a-z0-9!#$%&'*+/=?^_`{|}~.-]+@[a-z0-9]([a-z0-9-]*[a-z0-9])?(\.[a-z0-9]([a-z0-9-]*[a-z0-9])?)*$")
            .unwrap_or_else(|e| panic!("email grammar failed to compile: {}", e))
    });

    grammar.is_match(email)
}
