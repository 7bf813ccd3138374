//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into `{"error": "..."}` bodies with
//! consistent status codes. Internal failures are logged here and replaced by
//! a generic message so their cause never reaches the client.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message returned in place of any internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Failure body returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable explanation of the failure.
    #[schema(example = "Invalid domain format")]
    pub error: String,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn client_message(error: &Error) -> &str {
    match error.code() {
        ErrorCode::InternalError => INTERNAL_ERROR_MESSAGE,
        ErrorCode::InvalidRequest => error.message(),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if self.code() == ErrorCode::InternalError {
            error!(
                error = %self,
                code = self.code().as_str(),
                trace_id = self.trace_id().unwrap_or("-"),
                "request failed"
            );
        }

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(ErrorBody {
            error: client_message(self).to_owned(),
        })
    }
}

/// Error handler for [`actix_web::web::JsonConfig`].
///
/// A body that cannot be decoded into the expected request shape is an
/// unexpected fault for this API, so it is reported as an internal error.
/// The decoder's message is kept in the logged error only.
///
/// # Examples
/// ```
/// use actix_web::web;
/// use email_finder::inbound::http::error::json_error_handler;
///
/// let config = web::JsonConfig::default().error_handler(json_error_handler);
/// ```
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    Error::internal(format!(
        "malformed request body for {} {}: {err}",
        req.method(),
        req.path()
    ))
    .into()
}
