//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MSI` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use msi_donations::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod email;
mod error;
mod payment;
mod server;

pub use email::EmailConfig;
pub use error::{ConfigError, ValidationError};
pub use payment::{PayFastConfig, PAYFAST_LIVE_PROCESS_URL, PAYFAST_SANDBOX_PROCESS_URL};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

use crate::domain::donation::GatewaySettings;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, public URL)
    #[serde(default)]
    pub server: ServerConfig,

    /// Payment gateway configuration (PayFast)
    pub payfast: PayFastConfig,

    /// Email configuration (Resend)
    #[serde(default)]
    pub email: EmailConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MSI` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MSI__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `MSI__PAYFAST__MERCHANT_ID=...` -> `payfast.merchant_id = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MSI")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.payfast.validate()?;
        self.email.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }

    /// Gateway processing URL for the configured environment.
    pub fn process_url(&self) -> &str {
        self.payfast.process_url(&self.server.environment)
    }

    /// Merchant settings for building gateway requests.
    ///
    /// Callback URLs are the configured paths joined to the public base URL.
    pub fn gateway_settings(&self) -> GatewaySettings {
        let base = self.server.base_url();
        GatewaySettings {
            merchant_id: self.payfast.merchant_id.clone(),
            merchant_key: self.payfast.merchant_key.clone(),
            return_url: format!("{}{}", base, self.payfast.return_path),
            cancel_url: format!("{}{}", base, self.payfast.cancel_path),
            notify_url: format!("{}{}", base, self.payfast.notify_path),
            organisation_name: self.payfast.organisation_name.clone(),
            process_url: self.process_url().to_string(),
        }
    }
}
