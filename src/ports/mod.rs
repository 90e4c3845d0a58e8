//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `NotificationStore` - Records verified payment notifications, once each
//! - `MailSender` - Delivers contact and application emails

mod mail_sender;
mod notification_store;

pub use mail_sender::{MailError, MailSender};
pub use notification_store::{NotificationStore, SaveResult};
