//! Mail sender that records messages instead of delivering them.
//!
//! Used in development when no mail provider key is configured, and in
//! tests to assert on what would have been sent.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::enquiry::OutgoingMail;
use crate::ports::{MailError, MailSender};

#[derive(Debug, Clone, Default)]
pub struct RecordingMailSender {
    sent: Arc<Mutex<Vec<OutgoingMail>>>,
    fail_with: Option<MailError>,
}

impl RecordingMailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sender whose every delivery fails with `error`.
    pub fn failing(error: MailError) -> Self {
        Self {
            sent: Arc::default(),
            fail_with: Some(error),
        }
    }

    /// Messages recorded so far.
    pub async fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl MailSender for RecordingMailSender {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        if let Some(error) = &self.fail_with {
            return Err(error.clone());
        }
        tracing::info!(to = %mail.to, subject = %mail.subject, "Recorded outgoing mail");
        self.sent.lock().await.push(mail);
        Ok(())
    }
}
