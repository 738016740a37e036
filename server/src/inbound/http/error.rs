//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while giving every
//! failure the same wire envelope: a status selected from the tag table and
//! a body of `{"error": "<message>"}`. The mapping is total — any error
//! value that reaches the encoder produces a response.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::JSON_CONTENT_TYPE;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Wire shape of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable failure description.
    #[schema(example = "unknown cargo")]
    pub error: String,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidArgument => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        // Routing and decode failures keep the upstream contract: they fall
        // through to the internal bucket rather than a 4xx.
        ErrorCode::BadRoute | ErrorCode::MalformedBody | ErrorCode::Internal => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let body = json!({ "error": self.message() }).to_string();
        HttpResponse::build(self.status_code())
            .content_type(JSON_CONTENT_TYPE)
            .body(body)
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Self::internal(err.to_string())
    }
}

/// Extractor configuration rerouting body decode failures through the domain
/// error encoder.
///
/// A malformed JSON body becomes a [`ErrorCode::MalformedBody`] failure
/// carrying the decoder's own message and short-circuits before any port
/// call.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let failure = Error::malformed_body(err.to_string());
        actix_web::error::InternalError::from_response(err, failure.error_response()).into()
    })
}

/// Extractor configuration for path parameters that cannot be deserialised.
///
/// Pairs with the per-handler emptiness check on the identifier segment so
/// both the router and the decoder report the same bad-route condition.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        let failure = Error::bad_route();
        actix_web::error::InternalError::from_response(err, failure.error_response()).into()
    })
}

#[cfg(test)]
mod tests;
