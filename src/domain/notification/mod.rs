//! Notification module - Payment notification verification.
//!
//! Decodes the gateway's form-encoded notification, checks its MD5
//! signature against the merchant secret, and shapes verified payloads into
//! records for storage.

mod errors;
mod payload;
mod record;
mod signature;

pub use errors::NotificationError;
pub use payload::NotificationPayload;
pub use record::{AcceptedNotification, PaymentStatus};
pub use signature::{canonical_string, compute_signature, NotificationVerifier};

#[cfg(test)]
pub use signature::sign_test_payload;
