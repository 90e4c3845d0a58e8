//! Axum router configuration for donation endpoints.

use axum::{routing::post, Router};

use super::handlers::{create_donation, create_donation_fields};
use crate::adapters::http::AppState;

/// Create the donation router.
///
/// # Routes
/// - `POST /` - Form or JSON donor input, returns the handoff page
/// - `POST /fields` - Form or JSON donor input, returns the submission as JSON
pub fn donation_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_donation))
        .route("/fields", post(create_donation_fields))
}
