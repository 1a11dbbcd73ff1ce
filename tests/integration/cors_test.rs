// Integration tests for the CORS policy

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::http::{header, Method};
use helpers::*;
use serde_json::json;

#[actix_web::test]
async fn test_allowed_origin_is_echoed() {
    let srv = spawn_gateway(test_daraja_config(&unreachable_base_url()));

    let response = srv
        .post("/callback")
        .insert_header((header::ORIGIN, TEST_ALLOWED_ORIGIN))
        .send_json(&json!({}))
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        TEST_ALLOWED_ORIGIN
    );
}

#[actix_web::test]
async fn test_preflight_from_allowed_origin() {
    let srv = spawn_gateway(test_daraja_config(&unreachable_base_url()));

    let response = srv
        .request(Method::OPTIONS, srv.url("/lipa"))
        .insert_header((header::ORIGIN, TEST_ALLOWED_ORIGIN))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        TEST_ALLOWED_ORIGIN
    );
}

#[actix_web::test]
async fn test_other_origins_are_not_allowed() {
    let srv = spawn_gateway(test_daraja_config(&unreachable_base_url()));

    let response = srv
        .post("/callback")
        .insert_header((header::ORIGIN, "https://evil.example.com"))
        .send_json(&json!({}))
        .await
        .unwrap();

    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
