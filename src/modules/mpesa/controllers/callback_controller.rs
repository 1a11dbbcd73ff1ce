use actix_web::{post, web, HttpResponse};
use serde_json::{json, Value};
use tracing::info;

use crate::modules::mpesa::models::StkCallback;

/// Receive the asynchronous STK push result
///
/// POST /callback
///
/// The body is logged and acknowledged with `200 {"message": "success"}`
/// whatever it contains. Nothing is correlated or verified.
#[post("/callback")]
pub async fn receive_callback(body: web::Bytes) -> HttpResponse {
    let payload: Option<Value> = serde_json::from_slice(&body).ok();
    let callback = payload.as_ref().and_then(StkCallback::from_payload);

    match callback {
        Some(callback) => info!(
            merchant_request_id = %callback.merchant_request_id,
            checkout_request_id = %callback.checkout_request_id,
            result_code = callback.result_code,
            result_desc = %callback.result_desc,
            receipt = ?callback.metadata("MpesaReceiptNumber"),
            success = callback.is_success(),
            "STK callback received"
        ),
        None => {
            let raw = payload
                .unwrap_or_else(|| Value::String(String::from_utf8_lossy(&body).into_owned()));
            info!(payload = %raw, "Callback received");
        }
    }

    HttpResponse::Ok().json(json!({ "message": "success" }))
}
