use secrecy::SecretString;
use serde::Deserialize;
use serde_json::Value;

/// OAuth response from `/oauth/v1/generate`
#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: SecretString,
    /// Daraja sends this as a string ("3599"); kept raw.
    #[serde(default)]
    pub expires_in: Option<Value>,
}

impl AccessToken {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: SecretString::new(access_token.into()),
            expires_in: None,
        }
    }
}
