//! Axum router configuration for gateway notifications.

use axum::{routing::post, Router};

use super::handlers::handle_payfast_notification;
use crate::adapters::http::AppState;

/// Create the notification router.
///
/// No authentication; every payload is checked against the merchant secret.
///
/// # Routes
/// - `POST /notify` - PayFast notification
pub fn notification_routes() -> Router<AppState> {
    Router::new().route("/notify", post(handle_payfast_notification))
}
