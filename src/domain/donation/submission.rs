//! Navigation intent handed to the browser.

use serde::Serialize;

use super::{GatewayFields, GatewaySettings};

/// Where and how the donor's browser should post the gateway fields.
///
/// Carries no rendering; the HTTP layer turns it into an auto-submitting
/// page or returns it as JSON to script-driven clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GatewaySubmission {
    pub action: String,
    pub method: &'static str,
    pub fields: GatewayFields,
}

/// Wraps built fields in a submission aimed at the configured process URL.
pub fn submit(fields: GatewayFields, settings: &GatewaySettings) -> GatewaySubmission {
    GatewaySubmission {
        action: settings.process_url.clone(),
        method: "POST",
        fields,
    }
}
