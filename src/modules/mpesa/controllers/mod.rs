pub mod callback_controller;
pub mod lipa_controller;

use actix_web::web;

pub use callback_controller::receive_callback;
pub use lipa_controller::{decode_lipa_request, initiate_payment, LipaResponse};

/// Configure payment routes
///
/// Expects a `web::Data<LipaService>` registered on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(initiate_payment).service(receive_callback);
}
