//! Notification command handlers.

mod handle_payment_notification;
mod prune_notifications;

pub use handle_payment_notification::{
    HandlePaymentNotificationCommand, HandlePaymentNotificationHandler,
    HandlePaymentNotificationResult,
};
pub use prune_notifications::NotificationPruner;
