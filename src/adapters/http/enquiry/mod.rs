//! HTTP adapter for contact and application forms.

mod handlers;
mod routes;

pub use handlers::{submit_application, submit_contact, EnquiryApiError};
pub use routes::enquiry_routes;
