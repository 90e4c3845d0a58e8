//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod donation;
pub mod enquiry;
pub mod notification;

pub use donation::{PrepareDonationCommand, PrepareDonationHandler, PrepareDonationResult};
pub use enquiry::{
    ForwardApplicationCommand, ForwardApplicationHandler, SubmitContactCommand,
    SubmitContactHandler,
};
pub use notification::{
    HandlePaymentNotificationCommand, HandlePaymentNotificationHandler,
    HandlePaymentNotificationResult, NotificationPruner,
};
