//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (errors, HTML escaping)
//! - `donation` - Donation validation and gateway request building
//! - `notification` - Gateway notification verification
//! - `enquiry` - Contact and application relays

pub mod donation;
pub mod enquiry;
pub mod foundation;
pub mod notification;
