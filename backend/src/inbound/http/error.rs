//! Domain error to HTTP response mapping.
//!
//! Client errors (`400`, `404`) are returned as the JSON [`Error`] envelope
//! unchanged. Internal errors are logged with their raw message and the
//! client sees a redacted envelope carrying only the trace identifier.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, HttpResponseBuilder, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const REDACTED_MESSAGE: &str = "Internal server error";

/// Builder preset with the status for `error` and its trace header.
fn builder_for(error: &Error) -> HttpResponseBuilder {
    let mut builder = HttpResponse::build(error.status_code());
    if let Some(id) = error.trace_id() {
        builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
    }
    builder
}

/// The envelope a client is allowed to see.
fn client_view(error: &Error) -> Error {
    match (error.code(), error.trace_id()) {
        (ErrorCode::InternalError, Some(id)) => {
            Error::internal(REDACTED_MESSAGE).with_trace_id(id.to_owned())
        }
        (ErrorCode::InternalError, None) => Error::internal(REDACTED_MESSAGE),
        _ => error.clone(),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.code() {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.code() == ErrorCode::InternalError {
            error!(message = self.message(), trace_id = ?self.trace_id(), "request failed");
        }
        builder_for(self).json(client_view(self))
    }
}

/// Render `error` as a plain-text body carrying its raw message.
///
/// `GET /{id}` reports storage faults this way instead of through the
/// redacted envelope.
pub(crate) fn plain_text_response(error: &Error) -> HttpResponse {
    builder_for(error)
        .content_type(ContentType::plaintext())
        .body(error.message().to_owned())
}
