// Bearer-header parsing

use crate::error::{AuthError, AuthResult};

/// Pull the token out of an Authorization header value.
///
/// The value must split on a single space into exactly two parts,
/// `<scheme> <token>`; anything else is treated as an absent credential.
/// The scheme itself is not inspected; a token that is not ours fails
/// signature verification anyway.
pub fn extract_bearer_token(header: &str) -> AuthResult<&str> {
    let parts: Vec<&str> = header.split(' ').collect();

    if parts.len() != 2 {
        return Err(AuthError::MalformedAuthorization(
            "authorization header must be of the form 'Bearer <token>'".to_string(),
        ));
    }

    Ok(parts[1])
}
