//! HTTP handlers for contact and application forms.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::adapters::http::AppState;
use crate::application::handlers::{ForwardApplicationCommand, SubmitContactCommand};
use crate::domain::enquiry::{ApplicationSubmission, ContactMessage};

/// POST /api/contact - Accept a contact form message
pub async fn submit_contact(
    State(state): State<AppState>,
    body: Result<Json<ContactMessage>, JsonRejection>,
) -> Result<impl IntoResponse, EnquiryApiError> {
    let Json(message) = body.map_err(|e| {
        tracing::warn!(error = %e.body_text(), "Rejected contact form body");
        EnquiryApiError::InvalidContact
    })?;

    state
        .contact_handler()
        .handle(SubmitContactCommand { message });

    Ok(Json(json!({ "message": "Form submission received successfully" })))
}

/// POST /api/applications - Email an application form to the team
pub async fn submit_application(
    State(state): State<AppState>,
    body: Result<Json<ApplicationSubmission>, JsonRejection>,
) -> Result<impl IntoResponse, EnquiryApiError> {
    let Json(submission) = body.map_err(|e| {
        tracing::warn!(error = %e.body_text(), "Rejected application body");
        EnquiryApiError::InvalidApplication
    })?;

    state
        .application_handler()
        .handle(ForwardApplicationCommand { submission })
        .await
        .map_err(|_| EnquiryApiError::ApplicationNotSent)?;

    Ok(Json(json!({
        "success": true,
        "message": "Application submitted successfully"
    })))
}

/// API error type for enquiry endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnquiryApiError {
    InvalidContact,
    InvalidApplication,
    ApplicationNotSent,
}

impl IntoResponse for EnquiryApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            EnquiryApiError::InvalidContact => (StatusCode::BAD_REQUEST, "Failed to process form"),
            EnquiryApiError::InvalidApplication => {
                (StatusCode::BAD_REQUEST, "Failed to process application")
            }
            EnquiryApiError::ApplicationNotSent => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to process application")
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
