//! Tests for the HTTP error mapping.

use actix_web::http::{StatusCode, header};
use actix_web::{App, HttpResponse, body::to_bytes, test as actix_test, web};
use rstest::rstest;
use serde_json::Value;

use super::*;

#[rstest]
#[case(Error::invalid_argument("invalid argument"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("unknown cargo"), StatusCode::NOT_FOUND)]
#[case(Error::bad_route(), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(Error::malformed_body("unexpected token"), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn every_tag_maps_to_exactly_one_status(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(error.status_code(), expected);
}

#[actix_web::test]
async fn error_response_carries_the_message_envelope() {
    let response = Error::not_found("unknown cargo").error_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some(JSON_CONTENT_TYPE)
    );

    let bytes = to_bytes(response.into_body()).await.expect("body bytes");
    let body: Value = serde_json::from_slice(&bytes).expect("error payload");
    assert_eq!(body, serde_json::json!({ "error": "unknown cargo" }));
}

#[actix_web::test]
async fn malformed_json_body_short_circuits_with_internal_status() {
    let app = actix_test::init_service(
        App::new().app_data(json_config()).route(
            "/echo",
            web::post().to(|_body: web::Json<Value>| async { HttpResponse::Ok().finish() }),
        ),
    )
    .await;

    let request = actix_test::TestRequest::post()
        .uri("/echo")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{not json")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = actix_test::read_body_json(response).await;
    assert!(
        body.get("error").and_then(Value::as_str).is_some(),
        "decode failures must use the shared error envelope"
    );
}

#[test]
fn error_body_round_trips() {
    let body = ErrorBody {
        error: "invalid argument".to_owned(),
    };
    let encoded = serde_json::to_string(&body).expect("encode");
    let decoded: ErrorBody = serde_json::from_str(&encoded).expect("decode");
    assert_eq!(decoded, body);
}
