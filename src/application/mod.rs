//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    ForwardApplicationCommand, ForwardApplicationHandler, HandlePaymentNotificationCommand,
    HandlePaymentNotificationHandler, HandlePaymentNotificationResult, NotificationPruner,
    PrepareDonationCommand, PrepareDonationHandler, PrepareDonationResult, SubmitContactCommand,
    SubmitContactHandler,
};
