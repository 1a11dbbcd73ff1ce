use super::error::{SubmissionError, TokenError};
use crate::modules::mpesa::models::{AccessToken, StkPushPayload};
use async_trait::async_trait;
use secrecy::SecretString;
use serde_json::Value;

/// Remote Daraja operations used by the payment pipeline
#[async_trait]
pub trait DarajaApi: Send + Sync {
    /// Exchange the consumer key/secret for a bearer token
    async fn generate_token(&self) -> Result<AccessToken, TokenError>;

    /// Submit an STK push and return the provider's response body
    async fn stk_push(
        &self,
        access_token: &SecretString,
        payload: &StkPushPayload,
    ) -> Result<Value, SubmissionError>;
}
