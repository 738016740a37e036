//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], the generated specification served by Swagger UI
//! under `/booking/v1/docs` in debug builds. It registers every booking,
//! handling, and health path plus the wire schemas the handlers emit.

use utoipa::OpenApi;

use crate::inbound::http::booking::{
    BookCargoRequestBody, BookCargoResponseBody, CargoBody, ChangeDestinationRequestBody,
    EmptyResponseBody, ItineraryBody, LegBody, ListCargosResponseBody, ListLocationsResponseBody,
    LoadCargoResponseBody, LocationBody, RequestRoutesResponseBody,
};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::handling::RegisterIncidentRequestBody;

/// OpenAPI document for the booking and handling APIs.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shipping booking API",
        description = "HTTP interface for booking, routing, and tracking cargo shipments."
    ),
    servers((url = "/", description = "Relative to the deployment base URL")),
    paths(
        crate::inbound::http::booking::book_cargo,
        crate::inbound::http::booking::list_cargos,
        crate::inbound::http::booking::load_cargo,
        crate::inbound::http::booking::request_routes,
        crate::inbound::http::booking::assign_to_route,
        crate::inbound::http::booking::change_destination,
        crate::inbound::http::booking::list_locations,
        crate::inbound::http::handling::register_incident,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        BookCargoRequestBody,
        BookCargoResponseBody,
        CargoBody,
        ChangeDestinationRequestBody,
        EmptyResponseBody,
        ErrorBody,
        ItineraryBody,
        LegBody,
        ListCargosResponseBody,
        ListLocationsResponseBody,
        LoadCargoResponseBody,
        LocationBody,
        RegisterIncidentRequestBody,
    )),
    tags(
        (name = "booking", description = "Cargo booking and routing operations"),
        (name = "handling", description = "Handling event registration"),
        (name = "health", description = "Probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use utoipa::OpenApi;

    use super::ApiDoc;

    #[test]
    fn document_registers_every_operation_path() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for expected in [
            "/booking/v1/cargos",
            "/booking/v1/cargos/{id}",
            "/booking/v1/cargos/{id}/request_routes",
            "/booking/v1/cargos/{id}/assign_to_route",
            "/booking/v1/cargos/{id}/change_destination",
            "/booking/v1/locations",
            "/handling/v1/incidents",
            "/health/ready",
            "/health/live",
        ] {
            assert!(paths.contains_key(expected), "missing path {expected}");
        }
    }

    #[test]
    fn document_registers_the_error_schema() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.schemas.contains_key("ErrorBody"));
    }
}
