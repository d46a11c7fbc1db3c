// Token issue and validation

use crate::error::{AuthError, AuthResult};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Default token expiration in hours.
pub const DEFAULT_TOKEN_EXPIRY_HOURS: i64 = 6;

/// Claim set carried by a vireo token.
///
/// Tokens are never persisted; validity is purely a function of the
/// signature and the expiry claim at verification time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Always true on issued tokens.
    pub authorized: bool,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
    /// Subject (user ID)
    pub sub: u64,
}

impl Claims {
    /// Create a claim set for a user, expiring `expiry_hours` from now.
    pub fn new(user_id: u64, expiry_hours: i64) -> Self {
        let exp = chrono::Utc::now() + chrono::Duration::hours(expiry_hours);

        Self {
            authorized: true,
            exp: exp.timestamp() as usize,
            sub: user_id,
        }
    }
}

/// Create and sign a token for a user in one step.
///
/// # Errors
/// Returns `AuthError::HashingError` if encoding fails
pub fn generate_token(user_id: u64, secret: &str, expiry_hours: i64) -> AuthResult<String> {
    let claims = Claims::new(user_id, expiry_hours);
    let header = Header::new(Algorithm::HS256);
    let encoding_key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, &claims, &encoding_key)
        .map_err(|e| AuthError::HashingError(format!("token encoding error: {}", e)))
}

/// Validate a token and extract its claims.
///
/// Verifies the HMAC signature against the server secret and checks the
/// expiry claim.
///
/// # Errors
/// - `AuthError::TokenExpired` if the token has expired
/// - `AuthError::InvalidSignature` if signature verification fails
/// - `AuthError::MissingClaim` if the subject claim is absent
/// - `AuthError::MalformedAuthorization` for anything else the decoder rejects
pub fn validate_token(token: &str, secret: &str) -> AuthResult<Claims> {
    let validation = Validation::new(Algorithm::HS256);
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());

    let token_data =
        decode::<Claims>(token, &decoding_key, &validation).map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            ErrorKind::InvalidSignature => AuthError::InvalidSignature,
            _ => AuthError::MalformedAuthorization(format!("invalid token: {}", e)),
        })?;

    let claims = token_data.claims;

    // Server-assigned ids start at 1, so a zero subject cannot name a user.
    if claims.sub == 0 {
        return Err(AuthError::MissingClaim("sub"));
    }

    Ok(claims)
}

/// Validate a token and return the user id it was issued for.
pub fn extract_user_id(token: &str, secret: &str) -> AuthResult<u64> {
    let claims = validate_token(token, secret)?;
    Ok(claims.sub)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn create_test_token(secret: &str, exp_offset_secs: i64, sub: u64) -> String {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            authorized: true,
            exp: (now + exp_offset_secs) as usize,
            sub,
        };

        let header = Header::new(Algorithm::HS256);
        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        encode(&header, &claims, &encoding_key).unwrap()
    }

    #[test]
    fn test_generate_then_extract_round_trips_the_user_id() {
        let secret = "test-secret-key";
        let token = generate_token(42, secret, DEFAULT_TOKEN_EXPIRY_HOURS).unwrap();

        let user_id = extract_user_id(&token, secret).unwrap();
        assert_eq!(user_id, 42);
    }

    #[test]
    fn test_validate_token_valid() {
        let secret = "test-secret-key";
        let token = create_test_token(secret, 3600, 7); // Expires in 1 hour

        let claims = validate_token(&token, secret).unwrap();
        assert!(claims.authorized);
        assert_eq!(claims.sub, 7);
    }

    #[test]
    fn test_validate_token_expired() {
        let secret = "test-secret-key";
        let token = create_test_token(secret, -3600, 7); // Expired 1 hour ago

        let result = validate_token(&token, secret);
        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }

    #[test]
    fn test_validate_token_wrong_secret() {
        let secret = "test-secret-key";
        let token = create_test_token(secret, 3600, 7);

        let result = validate_token(&token, "wrong-secret");
        assert!(matches!(result, Err(AuthError::InvalidSignature)));
    }

    #[test]
    fn test_validate_token_zero_subject() {
        let secret = "test-secret-key";
        let token = create_test_token(secret, 3600, 0);

        let result = validate_token(&token, secret);
        assert!(matches!(result, Err(AuthError::MissingClaim("sub"))));
    }

    /// An empty string is not a valid token and must return an error, not panic.
    #[test]
    fn test_validate_empty_string_returns_error() {
        let result = validate_token("", "any-secret");
        assert!(matches!(result, Err(AuthError::MalformedAuthorization(_))));
    }

    #[test]
    fn test_validate_garbage_returns_error() {
        let result = validate_token("not-a-token", "any-secret");
        assert!(matches!(result, Err(AuthError::MalformedAuthorization(_))));
    }

    /// A token whose subject claim is a string rather than a number must be
    /// rejected at decode time.
    #[test]
    fn test_validate_non_numeric_subject_returns_error() {
        #[derive(serde::Serialize)]
        struct StringSubClaims {
            authorized: bool,
            exp: usize,
            sub: String,
        }

        let secret = "test-secret-key";
        let now = chrono::Utc::now().timestamp() as usize;
        let claims = StringSubClaims {
            authorized: true,
            exp: now + 3600,
            sub: "forty-two".to_string(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();

        let result = validate_token(&token, secret);
        assert!(matches!(result, Err(AuthError::MalformedAuthorization(_))));
    }
}
