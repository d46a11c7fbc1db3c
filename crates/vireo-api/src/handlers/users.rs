//! User handlers
//!
//! Registration, profile reads and updates, follow relationships, and
//! password changes. Every route except registration runs behind the
//! authentication middleware, and the write endpoints only operate on the
//! caller's own account.

use actix_web::{web, HttpResponse};
use log::info;
use vireo_auth::{hash_password, verify_password, AuthError};
use vireo_commons::{PrepareStage, UserDraft};
use vireo_store::UserRepo;

use super::models::{PasswordChange, SearchQuery};
use crate::error::ApiError;
use crate::extractors::CurrentUser;

/// POST /usuarios
///
/// Registers a new account. The draft is validated and normalized before the
/// password is hashed, so a rejected draft never costs a bcrypt run.
pub async fn register(
    users: web::Data<UserRepo>,
    body: web::Json<UserDraft>,
) -> Result<HttpResponse, ApiError> {
    let mut draft = body.into_inner();
    draft.prepare(PrepareStage::Registration)?;

    let password_hash = hash_password(&draft.password, None).await?;
    let id = users.create(&draft, &password_hash).await?;

    let user = users
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::Internal(format!("user {} missing after insert", id)))?;

    info!("user {} registered as '{}'", id, user.nick);

    Ok(HttpResponse::Created().json(user))
}

/// GET /usuarios?usuario=<term>
///
/// Lists users whose name or nick contains the term, case-insensitively.
pub async fn search_users(
    users: web::Data<UserRepo>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, ApiError> {
    let term = query.usuario.to_lowercase();
    let found = users.search(&term).await?;

    Ok(HttpResponse::Ok().json(found))
}

/// GET /usuarios/{id}
pub async fn get_user(
    users: web::Data<UserRepo>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let user = users
        .find_by_id(path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("user"))?;

    Ok(HttpResponse::Ok().json(user))
}

/// PUT /usuarios/{id}
///
/// Updates the caller's name, nick, and email. The password is untouched;
/// it has its own endpoint.
pub async fn update_user(
    current: CurrentUser,
    users: web::Data<UserRepo>,
    path: web::Path<u64>,
    body: web::Json<UserDraft>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    if id != current.id() {
        return Err(ApiError::Forbidden("you cannot update another user's data"));
    }

    let mut draft = body.into_inner();
    draft.prepare(PrepareStage::Edit)?;

    users.update(id, &draft).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /usuarios/{id}
///
/// Removes the caller's account. Publications and follow rows go with it
/// through the foreign keys.
pub async fn delete_user(
    current: CurrentUser,
    users: web::Data<UserRepo>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    if id != current.id() {
        return Err(ApiError::Forbidden("you cannot delete another user's data"));
    }

    users.delete(id).await?;

    info!("user {} deleted their account", id);

    Ok(HttpResponse::NoContent().finish())
}

/// POST /usuarios/{id}/seguir
///
/// Makes the caller a follower of the target user. Following someone twice
/// is a no-op, following yourself is rejected.
pub async fn follow_user(
    current: CurrentUser,
    users: web::Data<UserRepo>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let target = path.into_inner();
    if target == current.id() {
        return Err(ApiError::Forbidden("you cannot follow yourself"));
    }

    users
        .find_by_id(target)
        .await?
        .ok_or(ApiError::NotFound("user"))?;

    users.follow(target, current.id()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// POST /usuarios/{id}/parar-de-seguir
///
/// Removes the caller from the target's followers. Unfollowing someone the
/// caller never followed is a no-op.
pub async fn unfollow_user(
    current: CurrentUser,
    users: web::Data<UserRepo>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let target = path.into_inner();
    if target == current.id() {
        return Err(ApiError::Forbidden("you cannot unfollow yourself"));
    }

    users.unfollow(target, current.id()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// GET /usuarios/{id}/seguidores
pub async fn list_followers(
    users: web::Data<UserRepo>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let followers = users.list_followers(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(followers))
}

/// GET /usuarios/{id}/seguindo
pub async fn list_following(
    users: web::Data<UserRepo>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let following = users.list_following(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(following))
}

/// POST /usuarios/{id}/atualizar-senha
///
/// Replaces the caller's password after re-verifying the current one.
pub async fn update_password(
    current: CurrentUser,
    users: web::Data<UserRepo>,
    path: web::Path<u64>,
    body: web::Json<PasswordChange>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    if id != current.id() {
        return Err(ApiError::Forbidden(
            "you cannot change another user's password",
        ));
    }

    let stored_hash = users
        .find_password_hash(id)
        .await?
        .ok_or(ApiError::NotFound("user"))?;

    if !verify_password(&body.current, &stored_hash).await? {
        return Err(AuthError::InvalidCredentials(
            "the current password does not match the one on record".to_string(),
        )
        .into());
    }

    let new_hash = hash_password(&body.replacement, None).await?;
    users.update_password(id, &new_hash).await?;

    info!("user {} changed their password", id);

    Ok(HttpResponse::NoContent().finish())
}
