//! Notification error types.
//!
//! Every rejection maps to a status code the gateway understands: 4xx for
//! notifications we will never accept, 5xx when our own processing failed.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors that occur while verifying or processing a payment notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    /// Payload carried no `signature` field.
    #[error("Missing signature")]
    MissingSignature,

    /// Recomputed signature did not match the one supplied.
    #[error("Invalid signature")]
    InvalidSignature,

    /// Body could not be decoded as a form-encoded payload.
    #[error("Malformed notification: {0}")]
    Malformed(String),

    /// Verification passed but handling the notification failed.
    #[error("Processing failed: {0}")]
    Processing(String),
}

impl NotificationError {
    /// Maps the error to an HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            NotificationError::MissingSignature
            | NotificationError::InvalidSignature
            | NotificationError::Malformed(_) => StatusCode::BAD_REQUEST,
            NotificationError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to the caller.
    pub fn public_message(&self) -> &'static str {
        match self {
            NotificationError::MissingSignature
            | NotificationError::InvalidSignature
            | NotificationError::Malformed(_) => "Invalid signature",
            NotificationError::Processing(_) => "Internal server error",
        }
    }
}
