//! HTTP adapter for gateway notifications.

mod handlers;
mod routes;

pub use handlers::{handle_payfast_notification, NotificationApiError};
pub use routes::notification_routes;
