//! Lipa na M-Pesa Online gateway
//!
//! Accepts payment requests over HTTP, obtains a Daraja access token and
//! forwards an STK push to Safaricom, then acknowledges the asynchronous
//! callback.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::mpesa;
