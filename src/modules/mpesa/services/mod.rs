pub mod daraja_client;
pub mod daraja_trait;
pub mod error;
pub mod lipa_service;

pub use daraja_client::{basic_authorization, DarajaClient};
pub use daraja_trait::DarajaApi;
pub use error::{SubmissionError, TokenError};
pub use lipa_service::{LipaService, PaymentStage};
