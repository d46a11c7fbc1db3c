//! Login handler
//!
//! POST /login - Authenticates a user and returns a bearer token

use actix_web::{web, HttpResponse};
use log::info;
use vireo_auth::{generate_token, verify_password, AuthError};
use vireo_commons::Settings;
use vireo_store::UserRepo;

use super::models::{Credentials, LoginResponse};
use crate::error::ApiError;

/// POST /login
///
/// Verifies the submitted credentials against the stored bcrypt digest and
/// returns the user's id together with a freshly signed token.
pub async fn login(
    settings: web::Data<Settings>,
    users: web::Data<UserRepo>,
    body: web::Json<Credentials>,
) -> Result<HttpResponse, ApiError> {
    // An unknown email and a wrong password produce the same response, so
    // this endpoint never reveals which addresses are registered.
    let stored = users
        .find_credentials_by_email(&body.email)
        .await?
        .ok_or_else(|| AuthError::InvalidCredentials("invalid email or password".to_string()))?;

    if !verify_password(&body.password, &stored.password_hash).await? {
        return Err(AuthError::InvalidCredentials("invalid email or password".to_string()).into());
    }

    let token = generate_token(
        stored.id,
        &settings.auth.secret,
        settings.auth.token_expiry_hours,
    )?;

    info!("user {} logged in", stored.id);

    Ok(HttpResponse::Ok().json(LoginResponse {
        id: stored.id,
        token,
    }))
}
