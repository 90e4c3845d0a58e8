//! NotificationPruner - Removes verified notifications past their retention.
//!
//! Runs as a background loop next to the HTTP server so the notification
//! store does not grow without bound.

use chrono::{DateTime, Duration as RetentionPeriod, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time;

use crate::domain::foundation::DomainError;
use crate::ports::NotificationStore;

/// Periodically deletes notifications older than the retention period.
pub struct NotificationPruner {
    store: Arc<dyn NotificationStore>,
    retention: RetentionPeriod,
    interval: Duration,
}

impl NotificationPruner {
    pub fn new(
        store: Arc<dyn NotificationStore>,
        retention: RetentionPeriod,
        interval: Duration,
    ) -> Self {
        Self {
            store,
            retention,
            interval,
        }
    }

    /// Run the pruning loop until the shutdown signal is received.
    ///
    /// Store failures are logged and retried on the next tick.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = time::interval(self.interval);

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        return;
                    }
                }

                _ = interval.tick() => {
                    if let Err(err) = self.prune_once(Utc::now()).await {
                        tracing::warn!(error = %err, "Failed to prune payment notifications");
                    }
                }
            }
        }
    }

    /// Delete everything received before `now - retention`.
    ///
    /// Returns the number of records removed.
    pub async fn prune_once(&self, now: DateTime<Utc>) -> Result<u64, DomainError> {
        let cutoff = now - self.retention;
        let deleted = self.store.delete_before(cutoff).await?;
        if deleted > 0 {
            tracing::info!(deleted, cutoff = %cutoff, "Pruned payment notifications");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::notification::InMemoryNotificationStore;
    use crate::domain::notification::{AcceptedNotification, NotificationPayload};

    fn notification(provider_id: &str, received_at: DateTime<Utc>) -> AcceptedNotification {
        AcceptedNotification::from_payload(
            NotificationPayload::from_pairs([
                ("m_payment_id", "MSI-1"),
                ("pf_payment_id", provider_id),
                ("payment_status", "COMPLETE"),
            ]),
            received_at,
        )
    }

    fn pruner(store: &InMemoryNotificationStore, interval: Duration) -> NotificationPruner {
        NotificationPruner::new(Arc::new(store.clone()), RetentionPeriod::days(90), interval)
    }

    // ══════════════════════════════════════════════════════════════
    // Pruning
    // ══════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn prune_once_removes_only_expired_records() {
        let store = InMemoryNotificationStore::new();
        let now = Utc::now();
        store
            .save(notification("100", now - RetentionPeriod::days(120)))
            .await
            .unwrap();
        store
            .save(notification("200", now - RetentionPeriod::days(10)))
            .await
            .unwrap();

        let deleted = pruner(&store, Duration::from_secs(3600))
            .prune_once(now)
            .await
            .unwrap();

        assert_eq!(deleted, 1);
        let remaining = store.find_by_reference("MSI-1").await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].provider_payment_id.as_deref(), Some("200"));
    }

    #[tokio::test]
    async fn prune_once_on_empty_store_is_noop() {
        let store = InMemoryNotificationStore::new();
        let deleted = pruner(&store, Duration::from_secs(3600))
            .prune_once(Utc::now())
            .await
            .unwrap();
        assert_eq!(deleted, 0);
    }

    #[tokio::test]
    async fn run_prunes_and_stops_on_shutdown_signal() {
        let store = InMemoryNotificationStore::new();
        store
            .save(notification("100", Utc::now() - RetentionPeriod::days(365)))
            .await
            .unwrap();

        let pruner = pruner(&store, Duration::from_millis(10));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = tokio::spawn(async move { pruner.run(shutdown_rx).await });

        tokio::time::sleep(Duration::from_millis(50)).await;
        shutdown_tx.send(true).unwrap();
        handle.await.unwrap();

        assert!(store.is_empty().await);
    }
}
