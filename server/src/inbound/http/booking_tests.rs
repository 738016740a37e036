//! Tests for booking HTTP handlers.

use std::sync::Arc;

use actix_web::http::{StatusCode, header};
use actix_web::{App, test as actix_test, web};
use serde_json::{Value, json};

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{MockBookingService, MockHandlingService};
use crate::inbound::http::JSON_CONTENT_TYPE;
use crate::inbound::http::error::{json_config, path_config};
use crate::outbound::InMemoryShippingService;

fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .app_data(path_config())
        .service(
            web::scope("/booking/v1")
                .service(book_cargo)
                .service(list_cargos)
                .service(load_cargo)
                .service(request_routes)
                .service(assign_to_route)
                .service(change_destination)
                .service(list_locations),
        )
}

fn in_memory_state() -> HttpState {
    let service = Arc::new(InMemoryShippingService::new());
    HttpState::new(service.clone(), service)
}

fn mock_state(booking: MockBookingService) -> HttpState {
    HttpState::new(Arc::new(booking), Arc::new(MockHandlingService::new()))
}

fn book_request() -> actix_web::test::TestRequest {
    actix_test::TestRequest::post()
        .uri("/booking/v1/cargos")
        .set_json(json!({
            "origin": "USNYC",
            "destination": "SESTO",
            "arrival_deadline": "2024-12-01T00:00:00Z"
        }))
}

async fn book(app: &impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
>) -> String {
    let response = actix_test::call_service(app, book_request().to_request()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    body.get("tracking_id")
        .and_then(Value::as_str)
        .expect("tracking id present")
        .to_owned()
}

#[actix_web::test]
async fn book_cargo_returns_a_tracking_id() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let response = actix_test::call_service(&app, book_request().to_request()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some(JSON_CONTENT_TYPE)
    );
    let body: Value = actix_test::read_body_json(response).await;
    assert!(
        body.get("tracking_id")
            .and_then(Value::as_str)
            .is_some_and(|id| !id.is_empty())
    );
    assert!(body.get("error").is_none());
}

#[actix_web::test]
async fn booked_cargo_round_trips_through_load() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let id = book(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/booking/v1/cargos/{id}"))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert!(body.get("error").is_none());
    let cargo = body.get("cargo").expect("cargo envelope");
    assert_eq!(cargo["tracking_id"], Value::String(id));
    assert_eq!(cargo["origin"], "USNYC");
    assert_eq!(cargo["destination"], "SESTO");
    assert_eq!(cargo["routed"], Value::Bool(false));
}

#[actix_web::test]
async fn loading_an_unknown_cargo_returns_404() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/booking/v1/cargos/doesnotexist")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "error": "unknown cargo" }));
}

#[actix_web::test]
async fn booking_with_an_empty_origin_returns_400() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/booking/v1/cargos")
            .set_json(json!({
                "origin": "",
                "destination": "SESTO",
                "arrival_deadline": "2024-12-01T00:00:00Z"
            }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "error": "invalid argument" }));
}

#[actix_web::test]
async fn malformed_booking_body_maps_to_internal_error() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/booking/v1/cargos")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{not json")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = actix_test::read_body_json(response).await;
    assert!(body.get("error").and_then(Value::as_str).is_some());
}

#[actix_web::test]
async fn undecodable_deadline_maps_to_internal_error() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/booking/v1/cargos")
            .set_json(json!({
                "origin": "USNYC",
                "destination": "SESTO",
                "arrival_deadline": "next tuesday"
            }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn list_cargos_includes_the_booked_cargo() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let id = book(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/booking/v1/cargos")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    let cargos = body
        .get("cargos")
        .and_then(Value::as_array)
        .expect("cargos array");
    assert_eq!(cargos.len(), 1);
    assert_eq!(cargos[0]["tracking_id"], Value::String(id));
}

#[actix_web::test]
async fn request_routes_offers_a_direct_candidate() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let id = book(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/booking/v1/cargos/{id}/request_routes"))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    let routes = body
        .get("routes")
        .and_then(Value::as_array)
        .expect("routes array");
    assert!(!routes.is_empty());
    let leg = &routes[0]["legs"][0];
    assert_eq!(leg["from"], "USNYC");
    assert_eq!(leg["to"], "SESTO");
}

#[actix_web::test]
async fn request_routes_for_an_unknown_cargo_is_empty() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/booking/v1/cargos/doesnotexist/request_routes")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "routes": [] }));
}

#[actix_web::test]
async fn assigned_route_shows_in_the_cargo_view() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let id = book(&app).await;

    let routes_response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/booking/v1/cargos/{id}/request_routes"))
            .to_request(),
    )
    .await;
    let routes_body: Value = actix_test::read_body_json(routes_response).await;
    let route = routes_body["routes"][0].clone();

    let assign_response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri(&format!("/booking/v1/cargos/{id}/assign_to_route"))
            .set_json(route)
            .to_request(),
    )
    .await;
    assert_eq!(assign_response.status(), StatusCode::OK);
    let assign_body: Value = actix_test::read_body_json(assign_response).await;
    assert_eq!(assign_body, json!({}));

    let load_response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/booking/v1/cargos/{id}"))
            .to_request(),
    )
    .await;
    let load_body: Value = actix_test::read_body_json(load_response).await;
    let cargo = &load_body["cargo"];
    assert_eq!(cargo["routed"], Value::Bool(true));
    assert_eq!(cargo["misrouted"], Value::Bool(false));
    assert_eq!(cargo["legs"].as_array().map(Vec::len), Some(1));
}

#[actix_web::test]
async fn assigning_an_empty_itinerary_returns_400() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let id = book(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri(&format!("/booking/v1/cargos/{id}/assign_to_route"))
            .set_json(json!({ "legs": [] }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn change_destination_updates_the_cargo() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let id = book(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri(&format!("/booking/v1/cargos/{id}/change_destination"))
            .set_json(json!({ "destination": "FIHEL" }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({}));

    let load_response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/booking/v1/cargos/{id}"))
            .to_request(),
    )
    .await;
    let load_body: Value = actix_test::read_body_json(load_response).await;
    assert_eq!(load_body["cargo"]["destination"], "FIHEL");
}

#[actix_web::test]
async fn list_locations_returns_the_known_network() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/booking/v1/locations")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    let locations = body
        .get("locations")
        .and_then(Value::as_array)
        .expect("locations array");
    assert!(
        locations
            .iter()
            .any(|location| location["locode"] == "USNYC" && location["name"] == "New York")
    );
}

#[actix_web::test]
async fn service_not_found_error_maps_to_404() {
    let mut booking = MockBookingService::new();
    booking
        .expect_load_cargo()
        .returning(|_| Err(Error::not_found("unknown cargo")));
    let app = actix_test::init_service(test_app(mock_state(booking))).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/booking/v1/cargos/ABC123")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn service_invalid_argument_error_maps_to_400() {
    let mut booking = MockBookingService::new();
    booking
        .expect_book_new_cargo()
        .returning(|_, _, _| Err(Error::invalid_argument("invalid argument")));
    let app = actix_test::init_service(test_app(mock_state(booking))).await;

    let response = actix_test::call_service(&app, book_request().to_request()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn unclassified_service_error_maps_to_500() {
    let mut booking = MockBookingService::new();
    booking
        .expect_cargos()
        .returning(|| Err(Error::internal("store offline")));
    let app = actix_test::init_service(test_app(mock_state(booking))).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/booking/v1/cargos")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "error": "store offline" }));
}

#[test]
fn empty_path_identifier_is_a_routing_failure() {
    assert_eq!(
        tracking_id_param("").expect_err("blank id").code(),
        ErrorCode::BadRoute
    );
    assert_eq!(
        tracking_id_param("  ").expect_err("whitespace id").code(),
        ErrorCode::BadRoute
    );
    assert_eq!(
        tracking_id_param("ABC123").expect("usable id"),
        TrackingId::new("ABC123")
    );
}

#[test]
fn routing_failures_differ_from_decode_failures() {
    let route = tracking_id_param("").expect_err("blank id");
    let decode = Error::malformed_body("unexpected end of input");
    assert_ne!(route.code(), decode.code());
}

#[test]
fn success_envelope_round_trips() {
    let cargo = CargoBody {
        tracking_id: "ABC123".to_owned(),
        origin: "USNYC".to_owned(),
        destination: "SESTO".to_owned(),
        arrival_deadline: "2024-12-01T00:00:00Z".parse().expect("timestamp"),
        routed: false,
        misrouted: false,
        legs: Vec::new(),
    };

    let encoded = serde_json::to_string(&ListCargosResponseBody {
        cargos: vec![cargo.clone()],
    })
    .expect("encode");
    let decoded: ListCargosResponseBody = serde_json::from_str(&encoded).expect("decode");

    assert_eq!(decoded.cargos, vec![cargo]);
    assert!(!encoded.contains("\"error\""));
}
