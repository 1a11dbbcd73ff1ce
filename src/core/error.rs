use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

use crate::modules::mpesa::services::{SubmissionError, TokenError};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Message returned to clients for every failure they cannot act on.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Client input rejected before any outbound call
    #[error("{0}")]
    Validation(String),

    /// Request body could not be decoded
    #[error("{0}")]
    BadRequest(String),

    /// Access token could not be obtained from the provider
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// STK push submission failed
    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    /// Message that is safe to show to the caller
    pub fn client_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::BadRequest(msg) => msg.clone(),
            AppError::Submission(SubmissionError::Rejected { message, .. }) => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "message": self.client_message(),
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Token(_) => StatusCode::BAD_GATEWAY,
            AppError::Submission(SubmissionError::Rejected { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Submission(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
