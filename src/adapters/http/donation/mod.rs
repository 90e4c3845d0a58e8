//! HTTP adapter for donation endpoints.

mod dto;
mod handlers;
mod page;
mod routes;

pub use dto::DonationInput;
pub use handlers::{create_donation, create_donation_fields, DonationApiError};
pub use page::render_submission_page;
pub use routes::donation_routes;
