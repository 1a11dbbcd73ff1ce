use serde_json::Value;

/// Failure to obtain an OAuth access token
#[derive(thiserror::Error, Debug)]
pub enum TokenError {
    #[error("OAuth endpoint unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    #[error("OAuth endpoint returned HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("OAuth response has no usable access token: {0}")]
    InvalidResponse(String),
}

/// Failure to submit an STK push
#[derive(thiserror::Error, Debug)]
pub enum SubmissionError {
    /// Provider answered with a non-2xx status
    #[error("STK push rejected with HTTP {status}: {message}")]
    Rejected {
        status: u16,
        message: String,
        body: Value,
    },

    /// Connection refused, reset or timed out before a response arrived
    #[error("No response from STK push endpoint: {0}")]
    NoResponse(#[source] reqwest::Error),

    /// Request could not be built
    #[error("STK push request could not be sent: {0}")]
    Setup(String),
}

impl From<reqwest::Error> for SubmissionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            SubmissionError::Setup(err.to_string())
        } else {
            SubmissionError::NoResponse(err)
        }
    }
}
