//! HTTP handlers for donation endpoints.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::application::handlers::PrepareDonationCommand;
use crate::domain::donation::{DonationError, FieldErrors};

use super::dto::DonationInput;
use super::page::render_submission_page;
use crate::adapters::http::{AppState, ErrorResponse};

/// POST /api/donations - Validate donor input and return the auto-submitting handoff page
pub async fn create_donation(
    State(state): State<AppState>,
    DonationInput(form): DonationInput,
) -> Result<Html<String>, DonationApiError> {
    let handler = state.prepare_donation_handler();
    let result = handler.handle(PrepareDonationCommand { form })?;
    Ok(Html(render_submission_page(&result.submission)))
}

/// POST /api/donations/fields - Validate donor input and return the submission as JSON
pub async fn create_donation_fields(
    State(state): State<AppState>,
    DonationInput(form): DonationInput,
) -> Result<impl IntoResponse, DonationApiError> {
    let handler = state.prepare_donation_handler();
    let result = handler.handle(PrepareDonationCommand { form })?;
    Ok(Json(result.submission))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type for donation endpoints.
#[derive(Debug)]
pub enum DonationApiError {
    /// One or more fields failed validation.
    Validation(FieldErrors),
    /// Body could not be decoded.
    InvalidBody(String),
}

impl From<DonationError> for DonationApiError {
    fn from(err: DonationError) -> Self {
        match err {
            DonationError::Validation(errors) => DonationApiError::Validation(errors),
        }
    }
}

impl IntoResponse for DonationApiError {
    fn into_response(self) -> Response {
        match self {
            DonationApiError::Validation(errors) => {
                let details = serde_json::to_value(&errors).unwrap_or_default();
                let body = ErrorResponse::with_details(
                    "VALIDATION_FAILED",
                    "Please correct the highlighted fields",
                    details,
                );
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            DonationApiError::InvalidBody(message) => {
                let body = ErrorResponse::new("INVALID_REQUEST", message);
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
        }
    }
}
