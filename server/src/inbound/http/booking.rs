//! Booking HTTP handlers.
//!
//! ```text
//! POST /booking/v1/cargos
//! GET  /booking/v1/cargos
//! GET  /booking/v1/cargos/{id}
//! GET  /booking/v1/cargos/{id}/request_routes
//! POST /booking/v1/cargos/{id}/assign_to_route
//! POST /booking/v1/cargos/{id}/change_destination
//! GET  /booking/v1/locations
//! ```
//!
//! Each handler is the full pipeline for one operation: decode the wire
//! request into a typed command, invoke exactly one port method, encode the
//! success envelope. Failures travel as [`Error`] to the shared encoder.

use actix_web::{HttpResponse, get, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{CargoView, LocationView};
use crate::domain::{Error, Itinerary, Leg, TrackingId, UnLocode, VoyageNumber};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, json_ok};

/// Request body for `POST /booking/v1/cargos`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct BookCargoRequestBody {
    #[schema(example = "USNYC")]
    pub origin: String,
    #[schema(example = "SESTO")]
    pub destination: String,
    #[schema(format = "date-time", value_type = String)]
    pub arrival_deadline: DateTime<Utc>,
}

/// Success body carrying the assigned tracking id.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookCargoResponseBody {
    pub tracking_id: String,
}

/// One itinerary leg on the wire. Field names match the historical contract.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct LegBody {
    pub voyage_number: String,
    pub from: String,
    pub to: String,
    #[schema(format = "date-time", value_type = String)]
    pub load_time: DateTime<Utc>,
    #[schema(format = "date-time", value_type = String)]
    pub unload_time: DateTime<Utc>,
}

/// Itinerary payload for route assignment and cargo views.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ItineraryBody {
    #[serde(default)]
    pub legs: Vec<LegBody>,
}

/// Cargo read model on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CargoBody {
    pub tracking_id: String,
    pub origin: String,
    pub destination: String,
    #[schema(format = "date-time", value_type = String)]
    pub arrival_deadline: DateTime<Utc>,
    pub routed: bool,
    pub misrouted: bool,
    pub legs: Vec<LegBody>,
}

/// Envelope for `GET /booking/v1/cargos`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListCargosResponseBody {
    pub cargos: Vec<CargoBody>,
}

/// Envelope for `GET /booking/v1/cargos/{id}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoadCargoResponseBody {
    pub cargo: CargoBody,
}

/// Envelope for `GET /booking/v1/cargos/{id}/request_routes`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RequestRoutesResponseBody {
    pub routes: Vec<ItineraryBody>,
}

/// Request body for `POST /booking/v1/cargos/{id}/change_destination`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ChangeDestinationRequestBody {
    #[schema(example = "FIHEL")]
    pub destination: String,
}

/// Location read model on the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LocationBody {
    pub locode: String,
    pub name: String,
}

/// Envelope for `GET /booking/v1/locations`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListLocationsResponseBody {
    pub locations: Vec<LocationBody>,
}

/// Empty success envelope for the write operations.
///
/// Serialises to `{}`: the error half of the historical envelope never
/// appears on the success path.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct EmptyResponseBody {}

impl From<LegBody> for Leg {
    fn from(value: LegBody) -> Self {
        Self {
            voyage_number: VoyageNumber::new(value.voyage_number),
            load_location: UnLocode::new(value.from),
            unload_location: UnLocode::new(value.to),
            load_time: value.load_time,
            unload_time: value.unload_time,
        }
    }
}

impl From<Leg> for LegBody {
    fn from(value: Leg) -> Self {
        Self {
            voyage_number: value.voyage_number.to_string(),
            from: value.load_location.to_string(),
            to: value.unload_location.to_string(),
            load_time: value.load_time,
            unload_time: value.unload_time,
        }
    }
}

impl From<ItineraryBody> for Itinerary {
    fn from(value: ItineraryBody) -> Self {
        Self {
            legs: value.legs.into_iter().map(Leg::from).collect(),
        }
    }
}

impl From<Itinerary> for ItineraryBody {
    fn from(value: Itinerary) -> Self {
        Self {
            legs: value.legs.into_iter().map(LegBody::from).collect(),
        }
    }
}

impl From<CargoView> for CargoBody {
    fn from(value: CargoView) -> Self {
        Self {
            tracking_id: value.tracking_id.to_string(),
            origin: value.origin.to_string(),
            destination: value.destination.to_string(),
            arrival_deadline: value.arrival_deadline,
            routed: value.routed,
            misrouted: value.misrouted,
            legs: value.legs.into_iter().map(LegBody::from).collect(),
        }
    }
}

impl From<LocationView> for LocationBody {
    fn from(value: LocationView) -> Self {
        Self {
            locode: value.locode.to_string(),
            name: value.name,
        }
    }
}

/// Read the `{id}` segment, treating an absent or blank identifier as a
/// routing failure rather than a body decode failure.
fn tracking_id_param(id: &str) -> Result<TrackingId, Error> {
    if id.trim().is_empty() {
        return Err(Error::bad_route());
    }
    Ok(TrackingId::new(id))
}

/// Book a new cargo for the given route specification.
#[utoipa::path(
    post,
    path = "/booking/v1/cargos",
    request_body = BookCargoRequestBody,
    responses(
        (status = 200, description = "Cargo booked", body = BookCargoResponseBody),
        (status = 400, description = "Invalid argument", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody)
    ),
    tags = ["booking"],
    operation_id = "bookCargo"
)]
#[post("/cargos")]
pub async fn book_cargo(
    state: web::Data<HttpState>,
    payload: web::Json<BookCargoRequestBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let tracking_id = state
        .booking
        .book_new_cargo(
            UnLocode::new(body.origin),
            UnLocode::new(body.destination),
            body.arrival_deadline,
        )
        .await?;
    json_ok(&BookCargoResponseBody {
        tracking_id: tracking_id.to_string(),
    })
}

/// List every booked cargo.
#[utoipa::path(
    get,
    path = "/booking/v1/cargos",
    responses(
        (status = 200, description = "Cargo summaries", body = ListCargosResponseBody),
        (status = 500, description = "Internal error", body = ErrorBody)
    ),
    tags = ["booking"],
    operation_id = "listCargos"
)]
#[get("/cargos")]
pub async fn list_cargos(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let cargos = state.booking.cargos().await?;
    json_ok(&ListCargosResponseBody {
        cargos: cargos.into_iter().map(CargoBody::from).collect(),
    })
}

/// Load the detail view of one cargo.
#[utoipa::path(
    get,
    path = "/booking/v1/cargos/{id}",
    params(("id" = String, Path, description = "Cargo tracking id")),
    responses(
        (status = 200, description = "Cargo detail", body = LoadCargoResponseBody),
        (status = 404, description = "Unknown cargo", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody)
    ),
    tags = ["booking"],
    operation_id = "loadCargo"
)]
#[get("/cargos/{id}")]
pub async fn load_cargo(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = tracking_id_param(&path.into_inner())?;
    let cargo = state.booking.load_cargo(id).await?;
    json_ok(&LoadCargoResponseBody {
        cargo: cargo.into(),
    })
}

/// Request candidate itineraries for a cargo.
#[utoipa::path(
    get,
    path = "/booking/v1/cargos/{id}/request_routes",
    params(("id" = String, Path, description = "Cargo tracking id")),
    responses(
        (status = 200, description = "Candidate itineraries", body = RequestRoutesResponseBody),
        (status = 500, description = "Internal error", body = ErrorBody)
    ),
    tags = ["booking"],
    operation_id = "requestRoutes"
)]
#[get("/cargos/{id}/request_routes")]
pub async fn request_routes(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = tracking_id_param(&path.into_inner())?;
    let routes = state.booking.request_possible_routes(id).await?;
    json_ok(&RequestRoutesResponseBody {
        routes: routes.into_iter().map(ItineraryBody::from).collect(),
    })
}

/// Assign a cargo to one of its candidate itineraries.
#[utoipa::path(
    post,
    path = "/booking/v1/cargos/{id}/assign_to_route",
    params(("id" = String, Path, description = "Cargo tracking id")),
    request_body = ItineraryBody,
    responses(
        (status = 200, description = "Route assigned", body = EmptyResponseBody),
        (status = 400, description = "Invalid argument", body = ErrorBody),
        (status = 404, description = "Unknown cargo", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody)
    ),
    tags = ["booking"],
    operation_id = "assignToRoute"
)]
#[post("/cargos/{id}/assign_to_route")]
pub async fn assign_to_route(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ItineraryBody>,
) -> ApiResult<HttpResponse> {
    let id = tracking_id_param(&path.into_inner())?;
    state
        .booking
        .assign_cargo_to_route(id, payload.into_inner().into())
        .await?;
    json_ok(&EmptyResponseBody::default())
}

/// Change the destination of a booked cargo.
#[utoipa::path(
    post,
    path = "/booking/v1/cargos/{id}/change_destination",
    params(("id" = String, Path, description = "Cargo tracking id")),
    request_body = ChangeDestinationRequestBody,
    responses(
        (status = 200, description = "Destination changed", body = EmptyResponseBody),
        (status = 400, description = "Invalid argument", body = ErrorBody),
        (status = 404, description = "Unknown cargo", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody)
    ),
    tags = ["booking"],
    operation_id = "changeDestination"
)]
#[post("/cargos/{id}/change_destination")]
pub async fn change_destination(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ChangeDestinationRequestBody>,
) -> ApiResult<HttpResponse> {
    let id = tracking_id_param(&path.into_inner())?;
    state
        .booking
        .change_destination(id, UnLocode::new(payload.into_inner().destination))
        .await?;
    json_ok(&EmptyResponseBody::default())
}

/// List the locations known to the routing network.
#[utoipa::path(
    get,
    path = "/booking/v1/locations",
    responses(
        (status = 200, description = "Known locations", body = ListLocationsResponseBody),
        (status = 500, description = "Internal error", body = ErrorBody)
    ),
    tags = ["booking"],
    operation_id = "listLocations"
)]
#[get("/locations")]
pub async fn list_locations(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let locations = state.booking.locations().await?;
    json_ok(&ListLocationsResponseBody {
        locations: locations.into_iter().map(LocationBody::from).collect(),
    })
}

#[cfg(test)]
#[path = "booking_tests.rs"]
mod tests;
