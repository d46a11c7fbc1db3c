//! Authentication middleware for the Vireo API
//!
//! This module provides Actix-Web middleware that:
//! 1. Lets the two public endpoints (login and registration) pass through
//! 2. Extracts the Authorization header from HTTP requests
//! 3. Validates the bearer token and resolves the caller's user id
//! 4. Attaches the authenticated caller to request extensions
//! 5. Returns 401 Unauthorized on authentication failures
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vireo_api::middleware::Authentication;
//! use actix_web::{web, App};
//!
//! App::new().service(
//!     web::scope("")
//!         .wrap(Authentication::new(auth_settings))
//!         .route("/feed", web::get().to(my_protected_endpoint)),
//! )
//! ```
//!
//! Protected endpoints receive the caller through the [`CurrentUser`]
//! extractor rather than touching request extensions directly.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::Method,
    Error, HttpMessage, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use log::warn;
use std::{
    future::{ready, Ready},
    rc::Rc,
};
use vireo_auth::{extract_bearer_token, extract_user_id, AuthError};
use vireo_commons::AuthSettings;

use crate::error::ErrorResponse;
use crate::extractors::CurrentUser;

/// Authentication middleware factory
///
/// Creates middleware instances that authenticate incoming HTTP requests.
pub struct Authentication {
    settings: Rc<AuthSettings>,
}

impl Authentication {
    pub fn new(settings: AuthSettings) -> Self {
        Self {
            settings: Rc::new(settings),
        }
    }
}

/// Login and registration are the only endpoints reachable without a token.
fn is_public(req: &ServiceRequest) -> bool {
    req.method() == Method::POST && (req.path() == "/login" || req.path() == "/usuarios")
}

/// Validate the Authorization header and return the caller's user id.
fn authorize(req: &ServiceRequest, settings: &AuthSettings) -> Result<u64, AuthError> {
    let header = req.headers().get("Authorization").ok_or_else(|| {
        AuthError::MissingAuthorization("authorization header is required".to_string())
    })?;

    let header = header.to_str().map_err(|_| {
        AuthError::MalformedAuthorization(
            "authorization header contains invalid characters".to_string(),
        )
    })?;

    let token = extract_bearer_token(header)?;
    extract_user_id(token, &settings.secret)
}

impl<S> Transform<S, ServiceRequest> for Authentication
where
    S: Service<ServiceRequest, Response = ServiceResponse, Error = Error> + 'static,
    S::Future: 'static,
{
    type Response = ServiceResponse;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticationService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthenticationService {
            service: Rc::new(service),
            settings: self.settings.clone(),
        }))
    }
}

/// Authentication middleware service instance
pub struct AuthenticationService<S> {
    service: Rc<S>,
    settings: Rc<AuthSettings>,
}

impl<S> Service<ServiceRequest> for AuthenticationService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse, Error = Error> + 'static,
    S::Future: 'static,
{
    type Response = ServiceResponse;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let settings = self.settings.clone();

        Box::pin(async move {
            if is_public(&req) {
                return service.call(req).await;
            }

            match authorize(&req, &settings) {
                Ok(user_id) => {
                    req.extensions_mut().insert(CurrentUser(user_id));
                    service.call(req).await
                },
                Err(err) => {
                    warn!("rejected request to {}: {}", req.path(), err);
                    let (req, _) = req.into_parts();
                    let response =
                        HttpResponse::Unauthorized().json(ErrorResponse::new(err.to_string()));
                    Ok(ServiceResponse::new(req, response))
                },
            }
        })
    }
}
