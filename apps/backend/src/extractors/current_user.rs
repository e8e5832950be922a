use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::auth::jwt::Claims;
use crate::error::AppError;

/// The authenticated subject of the current request.
///
/// Read from the claims the `BearerAuth` middleware stored in request
/// extensions; request-scoped and dropped with the request. Using this
/// extractor on a route outside the gated scope yields a 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i64,
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<Claims>()
            .map(|claims| CurrentUser { id: claims.sub })
            .ok_or_else(AppError::unauthorized);

        ready(result)
    }
}
