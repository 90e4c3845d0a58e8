//! Donation command handlers.

mod prepare_donation;

pub use prepare_donation::{PrepareDonationCommand, PrepareDonationHandler, PrepareDonationResult};
