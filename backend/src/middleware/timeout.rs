//! Middleware attaching the per-request deadline.
//!
//! The deadline starts when the request enters the pipeline and is stored in
//! the request extensions, from where handlers extract it as a
//! [`RequestDeadline`] parameter and pass it down explicitly.

use std::task::{Context, Poll};
use std::time::Duration;

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, HttpMessage};
use futures_util::future::{Ready, ready};

use crate::domain::{DEFAULT_REQUEST_TIMEOUT, RequestDeadline};

/// Attach a [`RequestDeadline`] of `timeout` to every request.
///
/// # Examples
/// ```
/// use std::time::Duration;
///
/// use actix_web::App;
/// use trackme::middleware::RequestTimeout;
///
/// let app = App::new().wrap(RequestTimeout::new(Duration::from_secs(5)));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RequestTimeout {
    timeout: Duration,
}

impl RequestTimeout {
    /// Create the middleware; each request gets `timeout` to complete.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for RequestTimeout {
    fn default() -> Self {
        Self::new(DEFAULT_REQUEST_TIMEOUT)
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestTimeout
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestTimeoutMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTimeoutMiddleware {
            service,
            timeout: self.timeout,
        }))
    }
}

/// Service wrapper produced by [`RequestTimeout`].
pub struct RequestTimeoutMiddleware<S> {
    service: S,
    timeout: Duration,
}

impl<S, B> Service<ServiceRequest> for RequestTimeoutMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        req.extensions_mut()
            .insert(RequestDeadline::after(self.timeout));
        self.service.call(req)
    }
}
