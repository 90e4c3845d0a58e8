//! Verified notification record.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use super::NotificationPayload;

/// Payment status reported by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Complete,
    Failed,
    Pending,
    Cancelled,
    Unknown(String),
}

impl PaymentStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "COMPLETE" => PaymentStatus::Complete,
            "FAILED" => PaymentStatus::Failed,
            "PENDING" => PaymentStatus::Pending,
            "CANCELLED" => PaymentStatus::Cancelled,
            _ => PaymentStatus::Unknown(raw.to_string()),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Complete => write!(f, "COMPLETE"),
            PaymentStatus::Failed => write!(f, "FAILED"),
            PaymentStatus::Pending => write!(f, "PENDING"),
            PaymentStatus::Cancelled => write!(f, "CANCELLED"),
            PaymentStatus::Unknown(raw) => write!(f, "{}", raw),
        }
    }
}

/// A notification that passed signature verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedNotification {
    pub payment_reference: Option<String>,
    pub provider_payment_id: Option<String>,
    pub status: PaymentStatus,
    pub amount: Option<String>,
    pub email_address: Option<String>,
    pub received_at: DateTime<Utc>,
    pub payload: NotificationPayload,
}

impl AcceptedNotification {
    /// Extracts the recorded fields from a verified payload.
    pub fn from_payload(payload: NotificationPayload, received_at: DateTime<Utc>) -> Self {
        Self {
            payment_reference: payload.payment_reference().map(str::to_string),
            provider_payment_id: payload.provider_payment_id().map(str::to_string),
            status: PaymentStatus::parse(payload.payment_status().unwrap_or_default()),
            amount: payload.amount().map(str::to_string),
            email_address: payload.email_address().map(str::to_string),
            received_at,
            payload,
        }
    }

    /// Key used to detect redelivery of the same notification.
    ///
    /// A payment is identified by the gateway's payment id, falling back to
    /// the merchant reference; recurring donations share one reference across
    /// months. The status is part of the key so a later status change for the
    /// same payment is recorded rather than collapsed into the first.
    pub fn dedup_key(&self) -> String {
        match self
            .provider_payment_id
            .as_deref()
            .or(self.payment_reference.as_deref())
        {
            Some(payment) => format!("{}:{}", payment, self.status),
            None => self.payload.signature().unwrap_or_default().to_string(),
        }
    }
}
