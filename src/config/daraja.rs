use crate::core::{AppError, Result};
use reqwest::Url;
use secrecy::{ExposeSecret, SecretString};
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://sandbox.safaricom.co.ke";
pub const OAUTH_PATH: &str = "/oauth/v1/generate?grant_type=client_credentials";
pub const STK_PUSH_PATH: &str = "/mpesa/stkpush/v1/processrequest";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_TRANSACTION_TYPE: &str = "CustomerPayBillOnline";
pub const DEFAULT_ACCOUNT_REFERENCE: &str = "CompanyXLTD";
pub const DEFAULT_TRANSACTION_DESC: &str = "Payment of X";

/// Daraja (M-Pesa) credentials, endpoints and STK push metadata
#[derive(Debug, Clone)]
pub struct DarajaConfig {
    pub consumer_key: SecretString,
    pub consumer_secret: SecretString,
    pub shortcode: String,
    pub passkey: SecretString,
    pub callback_url: String,
    pub oauth_url: String,
    pub stk_push_url: String,
    pub timeout_secs: u64,
    pub transaction_type: String,
    pub account_reference: String,
    pub transaction_desc: String,
}

impl DarajaConfig {
    /// Build a config against `DEFAULT_BASE_URL` with default metadata
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        shortcode: impl Into<String>,
        passkey: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: SecretString::new(consumer_key.into()),
            consumer_secret: SecretString::new(consumer_secret.into()),
            shortcode: shortcode.into(),
            passkey: SecretString::new(passkey.into()),
            callback_url: callback_url.into(),
            oauth_url: endpoint(DEFAULT_BASE_URL, OAUTH_PATH),
            stk_push_url: endpoint(DEFAULT_BASE_URL, STK_PUSH_PATH),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            transaction_type: DEFAULT_TRANSACTION_TYPE.to_string(),
            account_reference: DEFAULT_ACCOUNT_REFERENCE.to_string(),
            transaction_desc: DEFAULT_TRANSACTION_DESC.to_string(),
        }
    }

    /// Point both endpoints at another host, e.g. production or a local fake
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.oauth_url = endpoint(base_url, OAUTH_PATH);
        self.stk_push_url = endpoint(base_url, STK_PUSH_PATH);
        self
    }

    pub fn from_env() -> Result<Self> {
        let base_url = env::var("MPESA_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(DarajaConfig {
            consumer_key: SecretString::new(required("CONSUMER_KEY")?),
            consumer_secret: SecretString::new(required("CONSUMER_SECRET")?),
            shortcode: required("SHORTCODE")?,
            passkey: SecretString::new(required("PASSKEY")?),
            callback_url: required("CALLBACK_URL")?,
            oauth_url: env::var("MPESA_OAUTH_URL")
                .unwrap_or_else(|_| endpoint(&base_url, OAUTH_PATH)),
            stk_push_url: env::var("MPESA_STK_PUSH_URL")
                .unwrap_or_else(|_| endpoint(&base_url, STK_PUSH_PATH)),
            timeout_secs: env::var("MPESA_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
                .parse()
                .map_err(|_| AppError::configuration("Invalid MPESA_TIMEOUT_SECS"))?,
            transaction_type: env::var("TRANSACTION_TYPE")
                .unwrap_or_else(|_| DEFAULT_TRANSACTION_TYPE.to_string()),
            account_reference: env::var("ACCOUNT_REFERENCE")
                .unwrap_or_else(|_| DEFAULT_ACCOUNT_REFERENCE.to_string()),
            transaction_desc: env::var("TRANSACTION_DESC")
                .unwrap_or_else(|_| DEFAULT_TRANSACTION_DESC.to_string()),
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<()> {
        let required = [
            ("CONSUMER_KEY", self.consumer_key.expose_secret().as_str()),
            ("CONSUMER_SECRET", self.consumer_secret.expose_secret().as_str()),
            ("SHORTCODE", self.shortcode.as_str()),
            ("PASSKEY", self.passkey.expose_secret().as_str()),
            ("TRANSACTION_TYPE", self.transaction_type.as_str()),
            ("ACCOUNT_REFERENCE", self.account_reference.as_str()),
            ("TRANSACTION_DESC", self.transaction_desc.as_str()),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::configuration(format!("{} must not be empty", name)));
            }
        }

        if !self.shortcode.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::configuration("SHORTCODE must be numeric"));
        }

        validate_url("CALLBACK_URL", &self.callback_url)?;
        validate_url("MPESA_OAUTH_URL", &self.oauth_url)?;
        validate_url("MPESA_STK_PUSH_URL", &self.stk_push_url)?;

        if self.timeout_secs == 0 {
            return Err(AppError::configuration(
                "MPESA_TIMEOUT_SECS must be greater than 0",
            ));
        }

        Ok(())
    }
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

fn required(name: &str) -> Result<String> {
    env::var(name).map_err(|_| AppError::configuration(format!("{} not set", name)))
}

fn validate_url(name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value)
        .map_err(|e| AppError::configuration(format!("{} is not a valid URL: {}", name, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(AppError::configuration(format!(
            "{} must use http or https, got {}",
            name, other
        ))),
    }
}
