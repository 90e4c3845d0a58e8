//! Payment gateway configuration

use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// PayFast live processing endpoint.
pub const PAYFAST_LIVE_PROCESS_URL: &str = "https://www.payfast.co.za/eng/process";

/// PayFast sandbox processing endpoint.
pub const PAYFAST_SANDBOX_PROCESS_URL: &str = "https://sandbox.payfast.co.za/eng/process";

/// Payment gateway configuration (PayFast)
#[derive(Debug, Clone, Deserialize)]
pub struct PayFastConfig {
    /// Merchant identifier issued by PayFast
    pub merchant_id: String,

    /// Merchant key, posted alongside the merchant id
    pub merchant_key: String,

    /// Shared secret appended to the canonical string when signing notifications
    pub merchant_secret: String,

    /// Explicit processing URL; falls back to live/sandbox by environment
    pub process_url: Option<String>,

    /// Smallest accepted donation
    #[serde(default = "default_minimum_amount")]
    pub minimum_amount: Decimal,

    /// Path the donor returns to after paying
    #[serde(default = "default_return_path")]
    pub return_path: String,

    /// Path the donor returns to after cancelling
    #[serde(default = "default_cancel_path")]
    pub cancel_path: String,

    /// Path PayFast posts notifications to
    #[serde(default = "default_notify_path")]
    pub notify_path: String,

    /// Organisation name used in item names and descriptions
    #[serde(default = "default_organisation_name")]
    pub organisation_name: String,

    /// Days a verified notification is kept before pruning
    #[serde(default = "default_notification_retention_days")]
    pub notification_retention_days: u32,

    /// Seconds between pruning passes
    #[serde(default = "default_prune_interval_secs")]
    pub prune_interval_secs: u64,
}

impl PayFastConfig {
    /// Resolve the processing endpoint for the given environment.
    pub fn process_url(&self, environment: &Environment) -> &str {
        match (&self.process_url, environment) {
            (Some(url), _) => url,
            (None, Environment::Production) => PAYFAST_LIVE_PROCESS_URL,
            (None, _) => PAYFAST_SANDBOX_PROCESS_URL,
        }
    }

    /// How long verified notifications are kept.
    pub fn notification_retention(&self) -> chrono::Duration {
        chrono::Duration::days(i64::from(self.notification_retention_days))
    }

    pub fn prune_interval(&self) -> Duration {
        Duration::from_secs(self.prune_interval_secs)
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.merchant_id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("PAYFAST__MERCHANT_ID"));
        }
        if self.merchant_key.trim().is_empty() {
            return Err(ValidationError::MissingRequired("PAYFAST__MERCHANT_KEY"));
        }
        if self.merchant_secret.is_empty() {
            return Err(ValidationError::MissingRequired("PAYFAST__MERCHANT_SECRET"));
        }
        if self.minimum_amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidMinimumAmount);
        }
        for (name, path) in [
            ("return_path", &self.return_path),
            ("cancel_path", &self.cancel_path),
            ("notify_path", &self.notify_path),
        ] {
            if !path.starts_with('/') {
                return Err(ValidationError::InvalidCallbackPath(name));
            }
        }
        if self.notification_retention_days == 0 || self.prune_interval_secs == 0 {
            return Err(ValidationError::InvalidRetention);
        }
        Ok(())
    }
}

impl Default for PayFastConfig {
    fn default() -> Self {
        Self {
            merchant_id: String::new(),
            merchant_key: String::new(),
            merchant_secret: String::new(),
            process_url: None,
            minimum_amount: default_minimum_amount(),
            return_path: default_return_path(),
            cancel_path: default_cancel_path(),
            notify_path: default_notify_path(),
            organisation_name: default_organisation_name(),
            notification_retention_days: default_notification_retention_days(),
            prune_interval_secs: default_prune_interval_secs(),
        }
    }
}

fn default_minimum_amount() -> Decimal {
    Decimal::new(500, 2)
}

fn default_return_path() -> String {
    "/donate/success".to_string()
}

fn default_cancel_path() -> String {
    "/donate".to_string()
}

fn default_notify_path() -> String {
    "/api/payfast/notify".to_string()
}

fn default_organisation_name() -> String {
    "Maths and Science Infinity".to_string()
}

fn default_notification_retention_days() -> u32 {
    90
}

fn default_prune_interval_secs() -> u64 {
    3600
}
