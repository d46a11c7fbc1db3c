//! Integration tests for password hashing and verification.
//!
//! Cost 4 is used throughout to keep the suite fast; production hashing uses
//! the bcrypt default cost.

use vireo_auth::password::{hash_password, verify_password};
use vireo_auth::AuthError;

#[tokio::test]
async fn test_hash_and_verify_password() {
    let password = "secret123";
    let hash = hash_password(password, Some(4)).await.expect("Failed to hash");
    assert!(hash.starts_with("$2")); // Bcrypt hash format

    let verified = verify_password(password, &hash).await.expect("Failed to verify");
    assert!(verified);

    let wrong_verified = verify_password("wrong-password", &hash)
        .await
        .expect("Failed to verify");
    assert!(!wrong_verified);
}

#[tokio::test]
async fn test_hashing_salts_each_digest() {
    let password = "secret123";
    let first = hash_password(password, Some(4)).await.expect("Failed to hash");
    let second = hash_password(password, Some(4)).await.expect("Failed to hash");

    // Same plaintext, different salts, both verifiable
    assert_ne!(first, second);
    assert!(verify_password(password, &first).await.unwrap());
    assert!(verify_password(password, &second).await.unwrap());
}

#[tokio::test]
async fn test_verify_near_miss_passwords_fail() {
    let hash = hash_password("secret123", Some(4)).await.expect("Failed to hash");

    assert!(!verify_password("secret12", &hash).await.unwrap());
    assert!(!verify_password("secret1234", &hash).await.unwrap());
    assert!(!verify_password("Secret123", &hash).await.unwrap());
    assert!(!verify_password("", &hash).await.unwrap());
}

#[tokio::test]
async fn test_verify_malformed_digest_is_an_error() {
    let result = verify_password("secret123", "not-a-bcrypt-digest").await;
    assert!(matches!(result, Err(AuthError::HashingError(_))));
}

#[tokio::test]
async fn test_hash_empty_password_still_hashes() {
    // Emptiness is a validation concern upstream; the hasher itself accepts it
    let hash = hash_password("", Some(4)).await.expect("Failed to hash");
    assert!(verify_password("", &hash).await.unwrap());
    assert!(!verify_password("x", &hash).await.unwrap());
}
