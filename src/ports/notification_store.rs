//! NotificationStore port - Interface for recording verified payment notifications.
//!
//! The gateway redelivers a notification until it receives a 2xx response,
//! so the same payment can arrive more than once. Stores key records by
//! `AcceptedNotification::dedup_key` and report duplicates instead of
//! recording them twice.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::foundation::DomainError;
use crate::domain::notification::AcceptedNotification;

/// Result of attempting to save a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveResult {
    /// Record was inserted (first delivery).
    Inserted,
    /// Record already exists (redelivery).
    AlreadyExists,
}

/// Port for storing and retrieving verified notifications.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// Save a verified notification.
    ///
    /// Returns `SaveResult::AlreadyExists` without modifying the stored
    /// record when the dedup key has been seen before.
    async fn save(&self, notification: AcceptedNotification) -> Result<SaveResult, DomainError>;

    /// All notifications recorded for a merchant payment reference, oldest first.
    async fn find_by_reference(
        &self,
        payment_reference: &str,
    ) -> Result<Vec<AcceptedNotification>, DomainError>;

    /// Delete records received before the given time.
    ///
    /// Returns the number of records deleted.
    async fn delete_before(&self, timestamp: DateTime<Utc>) -> Result<u64, DomainError>;
}
