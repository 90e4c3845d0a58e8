//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary and small helpers shared by the
//! donation, notification and enquiry modules.

mod errors;
mod html;

pub use errors::{DomainError, ErrorCode};
pub use html::html_escape;
