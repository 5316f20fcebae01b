//! Extractor exposing the request deadline to handlers.
//!
//! [`crate::middleware::RequestTimeout`] stores a [`RequestDeadline`] in the
//! request extensions. Handlers mounted without that middleware receive a
//! fresh deadline using [`crate::domain::DEFAULT_REQUEST_TIMEOUT`].

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{Ready, ready};

use crate::domain::RequestDeadline;

impl FromRequest for RequestDeadline {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let deadline = req
            .extensions()
            .get::<RequestDeadline>()
            .copied()
            .unwrap_or_default();
        ready(Ok(deadline))
    }
}
