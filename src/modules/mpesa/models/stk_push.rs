use super::lipa_request::PaymentRequest;
use crate::config::DarajaConfig;
use crate::core::timestamp;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

/// Lipa na M-Pesa Online (STK push) request body
///
/// Field names follow the Daraja contract exactly, including the
/// `PartyA`/`PartyB` and `CallBackURL` spellings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StkPushPayload {
    pub business_short_code: String,
    pub password: String,
    pub timestamp: String,
    pub transaction_type: String,
    pub amount: i64,
    #[serde(rename = "PartyA")]
    pub party_a: String,
    #[serde(rename = "PartyB")]
    pub party_b: String,
    pub phone_number: String,
    #[serde(rename = "CallBackURL")]
    pub callback_url: String,
    pub account_reference: String,
    pub transaction_desc: String,
}

impl StkPushPayload {
    /// Assemble the payload for a validated request at the given Daraja timestamp.
    ///
    /// The merchant shortcode is both the business identity and the receiving
    /// party; the customer phone is both the paying party and the prompted number.
    pub fn build(config: &DarajaConfig, request: &PaymentRequest, timestamp: String) -> Self {
        let password =
            timestamp::password(&config.shortcode, config.passkey.expose_secret(), &timestamp);

        Self {
            business_short_code: config.shortcode.clone(),
            password,
            timestamp,
            transaction_type: config.transaction_type.clone(),
            amount: request.amount,
            party_a: request.phone.clone(),
            party_b: config.shortcode.clone(),
            phone_number: request.phone.clone(),
            callback_url: config.callback_url.clone(),
            account_reference: config.account_reference.clone(),
            transaction_desc: config.transaction_desc.clone(),
        }
    }
}

/// Synchronous acknowledgement of an accepted STK push
///
/// Only used to enrich logs; the raw provider body is what gets relayed.
#[derive(Debug, Clone, Deserialize)]
pub struct StkPushAcknowledgement {
    #[serde(rename = "MerchantRequestID")]
    pub merchant_request_id: Option<String>,
    #[serde(rename = "CheckoutRequestID")]
    pub checkout_request_id: Option<String>,
    #[serde(rename = "ResponseCode")]
    pub response_code: Option<String>,
    #[serde(rename = "ResponseDescription")]
    pub response_description: Option<String>,
    #[serde(rename = "CustomerMessage")]
    pub customer_message: Option<String>,
}

/// Structured error body returned by Daraja on non-2xx responses
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderError {
    pub request_id: Option<String>,
    pub error_code: Option<String>,
    pub error_message: Option<String>,
}
