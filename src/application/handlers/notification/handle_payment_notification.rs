//! HandlePaymentNotificationHandler - Verifies and records gateway notifications.

use chrono::Utc;
use std::sync::Arc;

use crate::domain::notification::{
    AcceptedNotification, NotificationError, NotificationPayload, NotificationVerifier,
    PaymentStatus,
};
use crate::ports::{NotificationStore, SaveResult};

/// Command to handle a payment notification.
#[derive(Debug, Clone)]
pub struct HandlePaymentNotificationCommand {
    /// Raw form-encoded body as posted by the gateway.
    pub body: Vec<u8>,
}

/// Outcome of a verified notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlePaymentNotificationResult {
    /// First delivery, now recorded.
    Recorded {
        payment_reference: Option<String>,
        status: PaymentStatus,
    },
    /// Redelivery of a notification already recorded.
    AlreadyRecorded { payment_reference: Option<String> },
    /// Verified, but the store failed; the gateway still gets a success.
    NotRecorded { payment_reference: Option<String> },
}

/// Handler for gateway payment notifications.
///
/// The verdict depends only on the payload and the merchant secret. Storage
/// happens strictly after a valid verdict and never changes it.
pub struct HandlePaymentNotificationHandler {
    verifier: NotificationVerifier,
    store: Arc<dyn NotificationStore>,
}

impl HandlePaymentNotificationHandler {
    pub fn new(verifier: NotificationVerifier, store: Arc<dyn NotificationStore>) -> Self {
        Self { verifier, store }
    }

    pub async fn handle(
        &self,
        cmd: HandlePaymentNotificationCommand,
    ) -> Result<HandlePaymentNotificationResult, NotificationError> {
        // 1. Decode body, failing closed on anything unparseable
        let payload = NotificationPayload::parse_form(&cmd.body).map_err(|err| {
            tracing::warn!(reason = %err, body_len = cmd.body.len(), "Rejected malformed payment notification");
            err
        })?;

        // 2. Verify signature
        if let Err(err) = self.verifier.check(&payload) {
            tracing::warn!(
                payment_reference = payload.payment_reference().unwrap_or_default(),
                reason = %err,
                "Rejected payment notification"
            );
            return Err(err);
        }

        // 3. Record
        let notification = AcceptedNotification::from_payload(payload, Utc::now());
        let payment_reference = notification.payment_reference.clone();
        let status = notification.status.clone();

        tracing::info!(
            payment_reference = payment_reference.as_deref().unwrap_or_default(),
            payment_status = %status,
            amount = notification.amount.as_deref().unwrap_or_default(),
            "Payment notification verified"
        );

        match self.store.save(notification).await {
            Ok(SaveResult::Inserted) => Ok(HandlePaymentNotificationResult::Recorded {
                payment_reference,
                status,
            }),
            Ok(SaveResult::AlreadyExists) => {
                tracing::info!(
                    payment_reference = payment_reference.as_deref().unwrap_or_default(),
                    "Duplicate payment notification acknowledged"
                );
                Ok(HandlePaymentNotificationResult::AlreadyRecorded { payment_reference })
            }
            Err(err) => {
                tracing::warn!(
                    payment_reference = payment_reference.as_deref().unwrap_or_default(),
                    error = %err,
                    "Failed to record payment notification"
                );
                Ok(HandlePaymentNotificationResult::NotRecorded { payment_reference })
            }
        }
    }
}
