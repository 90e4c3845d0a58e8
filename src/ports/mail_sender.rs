//! MailSender port - Interface for delivering outgoing email.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::enquiry::OutgoingMail;

/// Errors from mail delivery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MailError {
    /// Transport could not be reached.
    #[error("Network error: {0}")]
    Network(String),

    /// Provider refused the message.
    #[error("Mail provider rejected message ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Provider rejected our credentials.
    #[error("Mail provider authentication failed")]
    AuthenticationFailed,

    /// Provider is throttling us.
    #[error("Mail provider rate limited")]
    RateLimited,
}

/// Port for sending email.
#[async_trait]
pub trait MailSender: Send + Sync {
    /// Deliver a single message.
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError>;
}
