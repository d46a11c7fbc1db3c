//! API routes configuration
//!
//! This module configures all HTTP routes for the Vireo API.

use actix_web::web;
use vireo_commons::AuthSettings;

use crate::error::ApiError;
use crate::handlers;
use crate::middleware::Authentication;

/// Configure API routes for Vireo
///
/// Every route lives in a single scope behind the authentication middleware;
/// the middleware itself waves through POST /login and POST /usuarios.
/// Malformed JSON bodies and non-numeric path ids are turned into 400
/// responses with the same error body shape the handlers produce.
pub fn configure_routes(cfg: &mut web::ServiceConfig, auth: &AuthSettings) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::BadInput(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| ApiError::BadInput(err.to_string()).into()),
    )
    .service(
        web::scope("")
            .wrap(Authentication::new(auth.clone()))
            .route("/login", web::post().to(handlers::login))
            .route("/usuarios", web::post().to(handlers::register))
            .route("/usuarios", web::get().to(handlers::search_users))
            .route("/usuarios/{id}", web::get().to(handlers::get_user))
            .route("/usuarios/{id}", web::put().to(handlers::update_user))
            .route("/usuarios/{id}", web::delete().to(handlers::delete_user))
            .route(
                "/usuarios/{id}/seguir",
                web::post().to(handlers::follow_user),
            )
            .route(
                "/usuarios/{id}/parar-de-seguir",
                web::post().to(handlers::unfollow_user),
            )
            .route(
                "/usuarios/{id}/seguidores",
                web::get().to(handlers::list_followers),
            )
            .route(
                "/usuarios/{id}/seguindo",
                web::get().to(handlers::list_following),
            )
            .route(
                "/usuarios/{id}/atualizar-senha",
                web::post().to(handlers::update_password),
            )
            .route(
                "/usuarios/{id}/publicacoes",
                web::get().to(handlers::list_user_publications),
            )
            .route("/publicacoes", web::post().to(handlers::create_publication))
            .route("/publicacoes", web::get().to(handlers::feed))
            .route("/publicacoes/{id}", web::get().to(handlers::get_publication))
            .route(
                "/publicacoes/{id}",
                web::put().to(handlers::update_publication),
            )
            .route(
                "/publicacoes/{id}",
                web::delete().to(handlers::delete_publication),
            )
            .route(
                "/publicacoes/{id}/curtir",
                web::post().to(handlers::like_publication),
            )
            .route(
                "/publicacoes/{id}/descurtir",
                web::post().to(handlers::unlike_publication),
            ),
    );
}
