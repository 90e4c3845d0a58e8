//! Resend mail sender - Delivers email through the Resend HTTP API.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use std::time::Duration;

use crate::domain::enquiry::OutgoingMail;
use crate::ports::{MailError, MailSender};

/// Configuration for the Resend sender.
#[derive(Debug, Clone)]
pub struct ResendConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Sender header, e.g. `MSI Website <noreply@msi.org.za>`.
    pub from: String,
    /// Base URL for the API (default: https://api.resend.com).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl ResendConfig {
    pub fn new(api_key: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            from: from.into(),
            base_url: "https://api.resend.com".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Mail sender backed by Resend.
pub struct ResendMailSender {
    config: ResendConfig,
    client: Client,
}

impl ResendMailSender {
    /// Creates a sender with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `MailError::Network` if the HTTP client cannot be built.
    pub fn new(config: ResendConfig) -> Result<Self, MailError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| MailError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.config.base_url.trim_end_matches('/'))
    }

    fn to_resend_request<'a>(&'a self, mail: &'a OutgoingMail) -> ResendRequest<'a> {
        ResendRequest {
            from: &self.config.from,
            to: vec![&mail.to],
            subject: &mail.subject,
            html: &mail.html,
            text: &mail.text,
            reply_to: mail.reply_to.as_deref(),
        }
    }

    async fn handle_response_status(response: Response) -> Result<(), MailError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(MailError::AuthenticationFailed),
            429 => Err(MailError::RateLimited),
            code => Err(MailError::Rejected {
                status: code,
                message: error_body,
            }),
        }
    }
}

#[async_trait]
impl MailSender for ResendMailSender {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        let response = self
            .client
            .post(self.emails_url())
            .bearer_auth(self.config.api_key())
            .json(&self.to_resend_request(&mail))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MailError::Network(format!("Request timed out: {}", e))
                } else {
                    MailError::Network(e.to_string())
                }
            })?;

        Self::handle_response_status(response).await?;

        tracing::info!(to = %mail.to, subject = %mail.subject, "Mail delivered");
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct ResendRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    html: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}
