//! Enquiry module - Contact messages and application forms relayed by email.

mod application;
mod contact;
mod mail;
mod recipient;

pub use application::{title_case_key, ApplicationSubmission};
pub use contact::ContactMessage;
pub use mail::OutgoingMail;
pub use recipient::RecipientPolicy;
