//! Handling-event HTTP handler.
//!
//! ```text
//! POST /handling/v1/incidents
//! ```

use actix_web::{HttpResponse, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, HandlingEventType, TrackingId, UnLocode, VoyageNumber};
use crate::inbound::http::booking::EmptyResponseBody;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, json_ok};

/// Request body for `POST /handling/v1/incidents`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RegisterIncidentRequestBody {
    pub id: String,
    #[schema(example = "SESTO")]
    pub location: String,
    pub voyage: String,
    #[schema(example = "Load")]
    pub event_type: String,
    #[schema(format = "date-time", value_type = String)]
    pub completion_time: DateTime<Utc>,
}

/// Record a handling occurrence for a cargo.
#[utoipa::path(
    post,
    path = "/handling/v1/incidents",
    request_body = RegisterIncidentRequestBody,
    responses(
        (status = 200, description = "Incident recorded", body = EmptyResponseBody),
        (status = 400, description = "Invalid argument", body = ErrorBody),
        (status = 404, description = "Unknown cargo", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody)
    ),
    tags = ["handling"],
    operation_id = "registerIncident"
)]
#[post("/incidents")]
pub async fn register_incident(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterIncidentRequestBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let event_type = body
        .event_type
        .parse::<HandlingEventType>()
        .map_err(|err| Error::invalid_argument(err.to_string()))?;
    state
        .handling
        .register_handling_event(
            body.completion_time,
            TrackingId::new(body.id),
            VoyageNumber::new(body.voyage),
            UnLocode::new(body.location),
            event_type,
        )
        .await?;
    json_ok(&EmptyResponseBody::default())
}

#[cfg(test)]
#[path = "handling_tests.rs"]
mod tests;
