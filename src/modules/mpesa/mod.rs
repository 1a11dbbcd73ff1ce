//! Lipa na M-Pesa Online: token acquisition, STK push submission and the
//! provider callback.

pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{LipaRequest, PaymentRequest, StkCallback, StkPushPayload};
pub use services::{DarajaApi, DarajaClient, LipaService, PaymentStage, SubmissionError, TokenError};
