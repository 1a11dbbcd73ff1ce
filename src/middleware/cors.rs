use actix_cors::Cors;

use super::request_id::REQUEST_ID_HEADER;

/// CORS policy admitting a single origin
///
/// Methods mirror the usual browser defaults; request headers are reflected.
pub fn cors(allowed_origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(allowed_origin)
        .allowed_methods(vec!["GET", "HEAD", "PUT", "PATCH", "POST", "DELETE"])
        .allow_any_header()
        .expose_headers(vec![REQUEST_ID_HEADER])
        .max_age(3600)
}
