use actix_web::{http::header, post, web, HttpRequest, HttpResponse};
use serde::Serialize;
use serde_json::Value;

use crate::core::{AppError, Result};
use crate::modules::mpesa::models::LipaRequest;
use crate::modules::mpesa::services::LipaService;

/// Successful `/lipa` response body
#[derive(Debug, Serialize)]
pub struct LipaResponse {
    pub message: &'static str,
    pub data: Value,
}

/// Initiate an STK push
///
/// POST /lipa
///
/// # Request Body
/// * `{"amount": number|string, "phone": number|string}`
///
/// # Returns
/// * `200 OK` - `{"message": "success", "data": <provider response>}`
/// * `400 Bad Request` - Malformed JSON
/// * `422 Unprocessable Entity` - Invalid amount/phone, or rejected by the provider
/// * `500 Internal Server Error` - Provider unreachable
/// * `502 Bad Gateway` - Access token could not be obtained
#[post("/lipa")]
pub async fn initiate_payment(
    req: HttpRequest,
    body: web::Bytes,
    service: web::Data<LipaService>,
) -> Result<HttpResponse> {
    let request = decode_lipa_request(&req, &body)?;
    let data = service.initiate(&request).await?;

    Ok(HttpResponse::Ok().json(LipaResponse {
        message: "success",
        data,
    }))
}

/// Decode the request body leniently.
///
/// Only JSON bodies are read; an empty body, a body of another content type,
/// or a JSON array all yield an empty request that then fails validation.
pub fn decode_lipa_request(req: &HttpRequest, body: &[u8]) -> Result<LipaRequest> {
    if body.iter().all(u8::is_ascii_whitespace) || !is_json(req) {
        return Ok(LipaRequest::default());
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::bad_request(format!("Invalid JSON body: {}", e)))?;

    match value {
        Value::Object(_) => serde_json::from_value(value)
            .map_err(|e| AppError::bad_request(format!("Invalid JSON body: {}", e))),
        Value::Array(_) => Ok(LipaRequest::default()),
        _ => Err(AppError::bad_request(
            "Invalid JSON body: expected an object",
        )),
    }
}

fn is_json(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}
