use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info, warn};

use super::daraja_client::DarajaClient;
use super::daraja_trait::DarajaApi;
use super::error::SubmissionError;
use crate::config::DarajaConfig;
use crate::core::{timestamp, AppError, Result};
use crate::modules::mpesa::models::{LipaRequest, StkPushAcknowledgement, StkPushPayload};

/// Stages a single `/lipa` request moves through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStage {
    Received,
    Validating,
    Rejected,
    TokenFetching,
    TokenFailed,
    Submitting,
    Success,
    ProviderError,
    NetworkError,
}

impl PaymentStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStage::Received => "received",
            PaymentStage::Validating => "validating",
            PaymentStage::Rejected => "rejected",
            PaymentStage::TokenFetching => "token_fetching",
            PaymentStage::TokenFailed => "token_failed",
            PaymentStage::Submitting => "submitting",
            PaymentStage::Success => "success",
            PaymentStage::ProviderError => "provider_error",
            PaymentStage::NetworkError => "network_error",
        }
    }

    /// Terminal stage reached by a pipeline outcome
    pub fn terminal<T>(outcome: &Result<T>) -> Self {
        match outcome {
            Ok(_) => PaymentStage::Success,
            Err(AppError::Validation(_)) | Err(AppError::BadRequest(_)) => PaymentStage::Rejected,
            Err(AppError::Token(_)) => PaymentStage::TokenFailed,
            Err(AppError::Submission(SubmissionError::Rejected { .. })) => {
                PaymentStage::ProviderError
            }
            Err(_) => PaymentStage::NetworkError,
        }
    }
}

impl fmt::Display for PaymentStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Orchestrates validation, token acquisition and STK push submission
pub struct LipaService {
    api: Arc<dyn DarajaApi>,
    config: DarajaConfig,
}

impl LipaService {
    pub fn new(api: Arc<dyn DarajaApi>, config: DarajaConfig) -> Self {
        Self { api, config }
    }

    /// Build the service with a real [`DarajaClient`]
    pub fn from_config(config: DarajaConfig) -> Result<Self> {
        let client = DarajaClient::new(config.clone())?;
        Ok(Self::new(Arc::new(client), config))
    }

    /// Run the full pipeline and return the provider's response body.
    ///
    /// Validation failures return before any network call. The token is
    /// fetched fresh for every request.
    pub async fn initiate(&self, request: &LipaRequest) -> Result<Value> {
        info!(stage = %PaymentStage::Received, "Payment request received");

        let outcome = self.run(request).await;
        let stage = PaymentStage::terminal(&outcome);

        match &outcome {
            Ok(_) => info!(stage = %stage, "Payment request completed"),
            Err(e) => error!(stage = %stage, error = %e, "Payment request failed"),
        }

        outcome
    }

    async fn run(&self, request: &LipaRequest) -> Result<Value> {
        info!(stage = %PaymentStage::Validating, "Validating payment request");
        let payment = request.validate().map_err(|e| {
            warn!(
                amount = %request.amount,
                error = %e,
                "Payment request rejected"
            );
            e
        })?;

        info!(
            stage = %PaymentStage::TokenFetching,
            amount = payment.amount,
            phone = %payment.masked_phone(),
            "Requesting access token"
        );
        let token = self.api.generate_token().await?;

        let payload = StkPushPayload::build(&self.config, &payment, timestamp::timestamp());
        info!(
            stage = %PaymentStage::Submitting,
            timestamp = %payload.timestamp,
            "Submitting STK push"
        );

        match self.api.stk_push(&token.access_token, &payload).await {
            Ok(data) => {
                if let Ok(ack) = serde_json::from_value::<StkPushAcknowledgement>(data.clone()) {
                    info!(
                        merchant_request_id = ack.merchant_request_id.as_deref().unwrap_or("-"),
                        checkout_request_id = ack.checkout_request_id.as_deref().unwrap_or("-"),
                        response_code = ack.response_code.as_deref().unwrap_or("-"),
                        "STK push accepted"
                    );
                }
                Ok(data)
            }
            Err(e) => {
                match &e {
                    SubmissionError::Rejected { status, body, .. } => {
                        warn!(status = *status, body = %body, "STK push rejected by provider");
                    }
                    SubmissionError::NoResponse(source) => {
                        error!(
                            timeout = source.is_timeout(),
                            connect = source.is_connect(),
                            error = %source,
                            "No response from STK push endpoint"
                        );
                    }
                    SubmissionError::Setup(reason) => {
                        error!(error = %reason, "Failed to set up STK push request");
                    }
                }
                Err(e.into())
            }
        }
    }
}
