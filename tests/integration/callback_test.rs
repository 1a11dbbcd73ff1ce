// Integration tests for POST /callback

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::http::StatusCode;
use helpers::*;
use serde_json::json;

fn stk_callback(result_code: i64) -> serde_json::Value {
    json!({
        "Body": {
            "stkCallback": {
                "MerchantRequestID": "29115-34620561-1",
                "CheckoutRequestID": "ws_CO_191220191020363925",
                "ResultCode": result_code,
                "ResultDesc": "The service request is processed successfully.",
                "CallbackMetadata": {
                    "Item": [
                        { "Name": "Amount", "Value": 1.00 },
                        { "Name": "MpesaReceiptNumber", "Value": "NLJ7RT61SV" },
                        { "Name": "TransactionDate", "Value": 20191219102115_i64 },
                        { "Name": "PhoneNumber", "Value": 254708374149_i64 }
                    ]
                }
            }
        }
    })
}

#[actix_web::test]
async fn test_callback_acknowledges_stk_result() {
    let srv = spawn_gateway(test_daraja_config(&unreachable_base_url()));

    let mut response = srv
        .post("/callback")
        .send_json(&stk_callback(0))
        .await
        .unwrap();

    let body = json_body(&mut response, StatusCode::OK).await;
    assert_message(&body, "success");
}

#[actix_web::test]
async fn test_callback_is_idempotent() {
    let srv = spawn_gateway(test_daraja_config(&unreachable_base_url()));

    for _ in 0..3 {
        let mut response = srv
            .post("/callback")
            .send_json(&stk_callback(1032))
            .await
            .unwrap();

        let body = json_body(&mut response, StatusCode::OK).await;
        assert_message(&body, "success");
    }
}

#[actix_web::test]
async fn test_callback_accepts_arbitrary_payloads() {
    let srv = spawn_gateway(test_daraja_config(&unreachable_base_url()));

    for payload in [json!({}), json!([1, 2, 3]), json!("plain"), json!({ "Body": 5 })] {
        let mut response = srv.post("/callback").send_json(&payload).await.unwrap();
        let body = json_body(&mut response, StatusCode::OK).await;
        assert_message(&body, "success");
    }
}

#[actix_web::test]
async fn test_callback_accepts_non_json_body() {
    let srv = spawn_gateway(test_daraja_config(&unreachable_base_url()));

    let mut response = srv
        .post("/callback")
        .insert_header(("Content-Type", "text/plain"))
        .send_body("not json at all")
        .await
        .unwrap();

    let body = json_body(&mut response, StatusCode::OK).await;
    assert_message(&body, "success");
}

#[actix_web::test]
async fn test_health_endpoint() {
    let srv = spawn_gateway(test_daraja_config(&unreachable_base_url()));

    let mut response = srv.get("/health").send().await.unwrap();

    let body = json_body(&mut response, StatusCode::OK).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "lipa-gateway");
}
