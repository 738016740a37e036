//! HTTP inbound adapter exposing the booking and handling REST endpoints.

pub mod booking;
pub mod error;
pub mod handling;
pub mod health;
pub mod state;

pub use error::ApiResult;

use actix_web::HttpResponse;
use serde::Serialize;

use crate::domain::Error;

/// Content type stamped on every JSON response, success or error.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Encode a success payload with an implicit 200 status.
///
/// Domain failures never reach this function: handlers return `Err` and the
/// [`error`] module owns that half of the wire contract.
pub(crate) fn json_ok<T: Serialize>(payload: &T) -> ApiResult<HttpResponse> {
    let body = serde_json::to_string(payload)
        .map_err(|err| Error::internal(format!("response encoding failed: {err}")))?;
    Ok(HttpResponse::Ok().content_type(JSON_CONTENT_TYPE).body(body))
}
