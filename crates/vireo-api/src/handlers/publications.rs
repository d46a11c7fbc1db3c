//! Publication handlers
//!
//! Creating, reading, updating, and deleting publications, the caller's
//! feed, and the like counters. Updates and deletes are restricted to the
//! publication's author; likes are open to any authenticated user.

use actix_web::{web, HttpResponse};
use log::info;
use vireo_commons::{Publication, PublicationDraft};
use vireo_store::PublicationRepo;

use crate::error::ApiError;
use crate::extractors::CurrentUser;

/// Publications may only be rewritten or removed by their author. Returns
/// the given denial as a `Forbidden` error when the caller is someone else.
fn ensure_author(
    stored: &Publication,
    current: CurrentUser,
    denial: &'static str,
) -> Result<(), ApiError> {
    if stored.author_id != current.id() {
        return Err(ApiError::Forbidden(denial));
    }

    Ok(())
}

/// POST /publicacoes
///
/// Creates a publication authored by the caller. The author comes from the
/// token, never from the body.
pub async fn create_publication(
    current: CurrentUser,
    publications: web::Data<PublicationRepo>,
    body: web::Json<PublicationDraft>,
) -> Result<HttpResponse, ApiError> {
    let mut draft = body.into_inner();
    draft.prepare()?;

    let id = publications.create(&draft, current.id()).await?;

    let publication = publications
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::Internal(format!("publication {} missing after insert", id)))?;

    info!("user {} published {}", current.id(), id);

    Ok(HttpResponse::Created().json(publication))
}

/// GET /publicacoes
///
/// The caller's feed: their own publications and those of everyone they
/// follow, newest first.
pub async fn feed(
    current: CurrentUser,
    publications: web::Data<PublicationRepo>,
) -> Result<HttpResponse, ApiError> {
    let feed = publications.list_feed(current.id()).await?;

    Ok(HttpResponse::Ok().json(feed))
}

/// GET /publicacoes/{id}
pub async fn get_publication(
    publications: web::Data<PublicationRepo>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let publication = publications
        .find_by_id(path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("publication"))?;

    Ok(HttpResponse::Ok().json(publication))
}

/// PUT /publicacoes/{id}
///
/// Rewrites the title and content of one of the caller's publications.
pub async fn update_publication(
    current: CurrentUser,
    publications: web::Data<PublicationRepo>,
    path: web::Path<u64>,
    body: web::Json<PublicationDraft>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let stored = publications
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound("publication"))?;

    ensure_author(
        &stored,
        current,
        "you cannot update a publication that is not yours",
    )?;

    let mut draft = body.into_inner();
    draft.prepare()?;

    publications.update(id, &draft).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /publicacoes/{id}
pub async fn delete_publication(
    current: CurrentUser,
    publications: web::Data<PublicationRepo>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let stored = publications
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound("publication"))?;

    ensure_author(
        &stored,
        current,
        "you cannot delete a publication that is not yours",
    )?;

    publications.delete(id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// GET /usuarios/{id}/publicacoes
///
/// Everything one author has published, newest first.
pub async fn list_user_publications(
    publications: web::Data<PublicationRepo>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let list = publications.list_by_author(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(list))
}

/// POST /publicacoes/{id}/curtir
///
/// Adds one like. The counter is anonymous; nothing records who liked what,
/// so repeated likes from the same caller keep counting.
pub async fn like_publication(
    publications: web::Data<PublicationRepo>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    publications
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound("publication"))?;

    publications.increment_likes(id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// POST /publicacoes/{id}/descurtir
///
/// Removes one like; the counter never goes below zero.
pub async fn unlike_publication(
    publications: web::Data<PublicationRepo>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    publications
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound("publication"))?;

    publications.decrement_likes(id).await?;

    Ok(HttpResponse::NoContent().finish())
}
