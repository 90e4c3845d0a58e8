//! Enquiry command handlers.

mod forward_application;
mod submit_contact;

pub use forward_application::{ForwardApplicationCommand, ForwardApplicationHandler};
pub use submit_contact::{SubmitContactCommand, SubmitContactHandler};
