//! Request extraction for donation endpoints.

use axum::async_trait;
use axum::extract::{Form, FromRequest, Json, Request};
use axum::http::header::CONTENT_TYPE;

use crate::domain::donation::DonationForm;

use super::handlers::DonationApiError;

/// Donor input from either a browser form post or a JSON body.
#[derive(Debug, Clone)]
pub struct DonationInput(pub DonationForm);

#[async_trait]
impl<S> FromRequest<S> for DonationInput
where
    S: Send + Sync,
{
    type Rejection = DonationApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.starts_with("application/json"))
            .unwrap_or(false);

        if is_json {
            let Json(form) = Json::<DonationForm>::from_request(req, state)
                .await
                .map_err(|e| DonationApiError::InvalidBody(e.body_text()))?;
            Ok(Self(form))
        } else {
            let Form(form) = Form::<DonationForm>::from_request(req, state)
                .await
                .map_err(|e| DonationApiError::InvalidBody(e.body_text()))?;
            Ok(Self(form))
        }
    }
}
