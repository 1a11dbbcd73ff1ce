pub mod health;
pub mod mpesa;

use actix_web::web;

/// Register every route the gateway serves
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(mpesa::configure).configure(health::configure);
}
