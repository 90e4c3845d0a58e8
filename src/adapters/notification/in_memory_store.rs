//! In-memory notification store.
//!
//! Suitable for a single instance and for tests. Records are lost on restart.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::notification::AcceptedNotification;
use crate::ports::{NotificationStore, SaveResult};

/// Notification store backed by a `HashMap` keyed on the dedup key.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationStore {
    records: Arc<RwLock<HashMap<String, AcceptedNotification>>>,
}

impl InMemoryNotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored notifications.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl NotificationStore for InMemoryNotificationStore {
    async fn save(&self, notification: AcceptedNotification) -> Result<SaveResult, DomainError> {
        let key = notification.dedup_key();
        let mut records = self.records.write().await;
        if records.contains_key(&key) {
            Ok(SaveResult::AlreadyExists)
        } else {
            records.insert(key, notification);
            Ok(SaveResult::Inserted)
        }
    }

    async fn find_by_reference(
        &self,
        payment_reference: &str,
    ) -> Result<Vec<AcceptedNotification>, DomainError> {
        let records = self.records.read().await;
        let mut found: Vec<AcceptedNotification> = records
            .values()
            .filter(|r| r.payment_reference.as_deref() == Some(payment_reference))
            .cloned()
            .collect();
        found.sort_by_key(|r| r.received_at);
        Ok(found)
    }

    async fn delete_before(&self, timestamp: DateTime<Utc>) -> Result<u64, DomainError> {
        let mut records = self.records.write().await;
        let before_count = records.len();
        records.retain(|_, r| r.received_at >= timestamp);
        Ok((before_count - records.len()) as u64)
    }
}
