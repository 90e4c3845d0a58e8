//! HTTP handlers for gateway notifications.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Json, State};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::adapters::http::AppState;
use crate::application::handlers::HandlePaymentNotificationCommand;
use crate::domain::notification::NotificationError;

/// POST /api/payfast/notify - Verify and record a PayFast notification
///
/// Responds `{ "success": true }` for every verified notification, including
/// redeliveries, so the gateway stops retrying.
pub async fn handle_payfast_notification(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, NotificationApiError> {
    let body = body.map_err(|e| NotificationError::Processing(e.body_text()))?;

    let handler = state.notification_handler();
    handler
        .handle(HandlePaymentNotificationCommand {
            body: body.to_vec(),
        })
        .await?;

    Ok(Json(json!({ "success": true })))
}

/// API error type that converts notification errors to gateway responses.
#[derive(Debug)]
pub struct NotificationApiError(NotificationError);

impl From<NotificationError> for NotificationApiError {
    fn from(err: NotificationError) -> Self {
        Self(err)
    }
}

impl IntoResponse for NotificationApiError {
    fn into_response(self) -> Response {
        if let NotificationError::Processing(detail) = &self.0 {
            tracing::error!(error = %detail, "Error processing payment notification");
        }
        let body = json!({ "error": self.0.public_message() });
        (self.0.status_code(), Json(body)).into_response()
    }
}
