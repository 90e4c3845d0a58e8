//! MSI Donations - Donation handoff and payment notification service
//!
//! This crate backs the Maths and Science Infinity website. It validates
//! donation forms, builds the field set for the PayFast hosted checkout, and
//! verifies the signed notifications PayFast posts back once a payment
//! settles. Contact and application enquiries are relayed by email.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
