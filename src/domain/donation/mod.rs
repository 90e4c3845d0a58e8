//! Donation module - Payment request building.
//!
//! Turns a donor's form into a validated donation, then into the ordered
//! field set and navigation intent for the PayFast process endpoint.

mod amount;
mod errors;
mod form;
mod frequency;
mod gateway;
mod reference;
mod submission;

pub use amount::{AmountError, DonationAmount};
pub use errors::DonationError;
pub use form::{validate, DonationForm, Donor, FieldErrors, ValidatedDonation};
pub use frequency::{DonationFrequency, UnknownFrequency};
pub use gateway::{
    build_gateway_fields, next_billing_date, prepare_gateway_fields, GatewayFields,
    GatewaySettings,
};
pub use reference::PaymentReference;
pub use submission::{submit, GatewaySubmission};
