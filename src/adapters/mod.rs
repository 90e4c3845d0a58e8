//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum routes for donations, notifications and enquiries
//! - `mail` - Mail senders (Resend relay, in-memory recorder)
//! - `notification` - Accepted notification stores

pub mod http;
pub mod mail;
pub mod notification;

pub use http::{app_router, with_middleware, AppState, ErrorResponse};
pub use mail::{RecordingMailSender, ResendConfig, ResendMailSender};
pub use notification::InMemoryNotificationStore;
