//! Axum router configuration for enquiry endpoints.

use axum::{routing::post, Router};

use super::handlers::{submit_application, submit_contact};
use crate::adapters::http::AppState;

/// Create the enquiry router.
///
/// # Routes
/// - `POST /contact` - Contact form message
/// - `POST /applications` - Tutor or volunteer application
pub fn enquiry_routes() -> Router<AppState> {
    Router::new()
        .route("/contact", post(submit_contact))
        .route("/applications", post(submit_application))
}
