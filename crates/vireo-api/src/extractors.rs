//! Handler extractor for the authenticated caller.
//!
//! The authentication middleware inserts a [`CurrentUser`] into the request
//! extensions after validating the bearer token. Handlers receive it as a
//! function parameter:
//!
//! ```rust,ignore
//! async fn feed(current: CurrentUser, repo: web::Data<PublicationRepo>) -> Result<HttpResponse, ApiError> {
//!     let publications = repo.list_feed(current.id()).await?;
//!     Ok(HttpResponse::Ok().json(publications))
//! }
//! ```

use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::error::ApiError;

/// The authenticated caller's user id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub u64);

impl CurrentUser {
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl FromRequest for CurrentUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        // Present on every request that passed the authentication middleware.
        // Absence means a route was registered outside the guarded scope.
        let user = req
            .extensions()
            .get::<CurrentUser>()
            .copied()
            .ok_or_else(|| {
                ApiError::Internal("authenticated user missing from request context".to_string())
            });

        ready(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extracts_inserted_user() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(CurrentUser(42));

        let user = CurrentUser::from_request(&req, &mut Payload::None)
            .await
            .unwrap();
        assert_eq!(user.id(), 42);
    }

    #[actix_web::test]
    async fn test_missing_user_is_an_internal_error() {
        let req = TestRequest::default().to_http_request();

        let err = CurrentUser::from_request(&req, &mut Payload::None)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Internal(_)));
    }
}
