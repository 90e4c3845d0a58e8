//! Email configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Email configuration (Resend)
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Resend API key; when absent, outgoing mail is only logged
    pub resend_api_key: Option<String>,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From name
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Recipient for form submissions that do not name one
    #[serde(default = "default_recipient")]
    pub default_recipient: String,

    /// Other addresses an application may name as its recipient (comma-separated)
    pub allowed_recipients: Option<String>,
}

impl EmailConfig {
    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    /// Allowed application recipients as a vector.
    pub fn allowed_recipients_list(&self) -> Vec<String> {
        self.allowed_recipients
            .as_ref()
            .map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether a real mail transport is configured.
    pub fn has_transport(&self) -> bool {
        self.resend_api_key
            .as_deref()
            .map(|key| !key.is_empty())
            .unwrap_or(false)
    }

    /// Validate email configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(key) = &self.resend_api_key {
            if !key.starts_with("re_") {
                return Err(ValidationError::InvalidResendKey);
            }
        }
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidEmailAddress("from_email"));
        }
        if !self.default_recipient.contains('@') {
            return Err(ValidationError::InvalidEmailAddress("default_recipient"));
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            resend_api_key: None,
            from_email: default_from_email(),
            from_name: default_from_name(),
            default_recipient: default_recipient(),
            allowed_recipients: None,
        }
    }
}

fn default_from_email() -> String {
    "noreply@msi.org.za".to_string()
}

fn default_from_name() -> String {
    "MSI Website".to_string()
}

fn default_recipient() -> String {
    "info@msi.org.za".to_string()
}
