use super::daraja_trait::DarajaApi;
use super::error::{SubmissionError, TokenError};
use crate::config::DarajaConfig;
use crate::core::{AppError, Result};
use crate::modules::mpesa::models::{AccessToken, ProviderError, StkPushPayload};
use async_trait::async_trait;
use base64::prelude::*;
use reqwest::{header, Client};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

/// Daraja API client
///
/// Implements [`DarajaApi`] against the Safaricom OAuth and STK push
/// endpoints. Docs: https://developer.safaricom.co.ke/APIs/MpesaExpressSimulate
pub struct DarajaClient {
    client: Client,
    config: DarajaConfig,
}

impl DarajaClient {
    /// Create a new Daraja client
    ///
    /// Both outbound calls share one connection pool and the configured timeout.
    pub fn new(config: DarajaConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }
}

/// `Basic` authorization value for the OAuth endpoint: base64 of `key:secret`
pub fn basic_authorization(consumer_key: &str, consumer_secret: &str) -> String {
    let credentials = BASE64_STANDARD.encode(format!("{}:{}", consumer_key, consumer_secret));
    format!("Basic {}", credentials)
}

/// Interpret a response body as JSON, falling back to the raw text
fn body_value(text: String) -> Value {
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

#[async_trait]
impl DarajaApi for DarajaClient {
    async fn generate_token(&self) -> std::result::Result<AccessToken, TokenError> {
        let response = self
            .client
            .get(&self.config.oauth_url)
            .header(
                header::AUTHORIZATION,
                basic_authorization(
                    self.config.consumer_key.expose_secret(),
                    self.config.consumer_secret.expose_secret(),
                ),
            )
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(TokenError::Unreachable)?;

        let status = response.status();
        let body = response.text().await.map_err(TokenError::Unreachable)?;

        if !status.is_success() {
            return Err(TokenError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let token: AccessToken = serde_json::from_str(&body)
            .map_err(|e| TokenError::InvalidResponse(e.to_string()))?;

        if token.access_token.expose_secret().trim().is_empty() {
            return Err(TokenError::InvalidResponse(
                "access_token is empty".to_string(),
            ));
        }

        Ok(token)
    }

    async fn stk_push(
        &self,
        access_token: &SecretString,
        payload: &StkPushPayload,
    ) -> std::result::Result<Value, SubmissionError> {
        let response = self
            .client
            .post(&self.config.stk_push_url)
            .bearer_auth(access_token.expose_secret())
            .header(header::ACCEPT, "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let data = body_value(response.text().await?);

        if status.is_success() {
            return Ok(data);
        }

        let message = serde_json::from_value::<ProviderError>(data.clone())
            .ok()
            .and_then(|error| error.error_message)
            .unwrap_or_else(|| {
                format!("Request rejected by provider (HTTP {})", status.as_u16())
            });

        Err(SubmissionError::Rejected {
            status: status.as_u16(),
            message,
            body: data,
        })
    }
}
