//! Shared fixtures for HTTP integration tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use rust_decimal::Decimal;
use secrecy::SecretString;
use std::sync::Arc;

use msi_donations::adapters::{AppState, InMemoryNotificationStore, RecordingMailSender};
use msi_donations::domain::donation::GatewaySettings;
use msi_donations::domain::enquiry::RecipientPolicy;
use msi_donations::domain::notification::{compute_signature, NotificationPayload, NotificationVerifier};

pub const MERCHANT_SECRET: &str = "jt7NOE43FZPn";

pub struct TestApp {
    pub state: AppState,
    pub store: Arc<InMemoryNotificationStore>,
    pub mail: RecordingMailSender,
}

pub fn test_app() -> TestApp {
    test_app_with_mail(RecordingMailSender::new())
}

pub fn test_app_with_mail(mail: RecordingMailSender) -> TestApp {
    let store = Arc::new(InMemoryNotificationStore::new());
    let state = AppState {
        gateway: GatewaySettings {
            merchant_id: "10000100".to_string(),
            merchant_key: "46f0cd694581a".to_string(),
            return_url: "https://msi.org.za/donate/success".to_string(),
            cancel_url: "https://msi.org.za/donate".to_string(),
            notify_url: "https://msi.org.za/api/payfast/notify".to_string(),
            organisation_name: "Maths and Science Infinity".to_string(),
            process_url: "https://sandbox.payfast.co.za/eng/process".to_string(),
        },
        minimum_amount: Decimal::new(500, 2),
        verifier: NotificationVerifier::new(SecretString::new(MERCHANT_SECRET.to_string())),
        notification_store: store.clone(),
        mail_sender: Arc::new(mail.clone()),
        recipients: RecipientPolicy::new("info@msi.org.za", ["partnerships@msi.org.za"]),
    };
    TestApp { state, store, mail }
}

/// Form-encodes `pairs` in order and appends a signature computed with `secret`.
pub fn signed_body(pairs: &[(&str, &str)], secret: &str) -> String {
    let payload = NotificationPayload::from_pairs(pairs.iter().copied());
    let signature = compute_signature(&payload, secret);
    let mut fields: Vec<(&str, &str)> = pairs.to_vec();
    fields.push(("signature", signature.as_str()));
    serde_urlencoded::to_string(&fields).unwrap()
}

pub fn form_post(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.into()))
        .unwrap()
}

pub fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}
