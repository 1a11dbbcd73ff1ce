use crate::core::{AppError, Result};
use reqwest::Url;
use std::env;

pub mod daraja;
pub mod server;

pub use daraja::DarajaConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub daraja: DarajaConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            },
            server: ServerConfig::from_env()?,
            daraja: DarajaConfig::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::configuration("PORT must be greater than 0"));
        }

        Url::parse(&self.server.allowed_origin).map_err(|e| {
            AppError::configuration(format!("CORS_ALLOWED_ORIGIN is not a valid origin: {}", e))
        })?;

        self.daraja.validate()
    }
}
