//! HTTP adapters - REST API implementations.
//!
//! Each area has its own adapter with handlers and routes. `app_router`
//! mounts them all; `with_middleware` adds tracing, request ids, timeouts
//! and CORS for serving.

pub mod donation;
pub mod enquiry;
pub mod notification;

mod error;
mod state;

pub use error::ErrorResponse;
pub use state::AppState;

use http::{header, HeaderValue, Method};
use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Create the complete application router.
///
/// # Routes
/// - `GET /healthz` - Liveness probe
/// - `POST /api/donations` - Donation handoff page
/// - `POST /api/donations/fields` - Donation handoff as JSON
/// - `POST /api/payfast/notify` - PayFast notification
/// - `POST /api/contact` - Contact form
/// - `POST /api/applications` - Application form
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .nest("/api/donations", donation::donation_routes())
        .nest("/api/payfast", notification::notification_routes())
        .nest("/api", enquiry::enquiry_routes())
        .with_state(state)
}

/// Wraps a router with the serving middleware stack.
pub fn with_middleware(router: Router, server: &ServerConfig) -> Router {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs)))
            .layer(cors),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mail::RecordingMailSender;
    use crate::adapters::notification::InMemoryNotificationStore;
    use crate::domain::donation::GatewaySettings;
    use crate::domain::enquiry::RecipientPolicy;
    use crate::domain::notification::NotificationVerifier;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use rust_decimal::Decimal;
    use secrecy::SecretString;
    use std::sync::Arc;
    use tower::ServiceExt;

    // ═══════════════════════════════════════════════════════════════════════
    // Test Fixtures
    // ═══════════════════════════════════════════════════════════════════════

    fn test_state() -> AppState {
        AppState {
            gateway: GatewaySettings {
                merchant_id: "10000100".to_string(),
                merchant_key: "46f0cd694581a".to_string(),
                return_url: "http://localhost:8080/donate/success".to_string(),
                cancel_url: "http://localhost:8080/donate".to_string(),
                notify_url: "http://localhost:8080/api/payfast/notify".to_string(),
                organisation_name: "Maths and Science Infinity".to_string(),
                process_url: "https://sandbox.payfast.co.za/eng/process".to_string(),
            },
            minimum_amount: Decimal::new(500, 2),
            verifier: NotificationVerifier::new(SecretString::new("test".to_string())),
            notification_store: Arc::new(InMemoryNotificationStore::new()),
            mail_sender: Arc::new(RecordingMailSender::new()),
            recipients: RecipientPolicy::default_only("info@msi.org.za"),
        }
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Routing
    // ═══════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn healthz_returns_ok() {
        let app = app_router(test_state());

        let response = app
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "ok");
    }

    #[tokio::test]
    async fn donation_form_post_returns_handoff_page() {
        let app = app_router(test_state());
        let body = "name_first=Thandi&name_last=Nkosi&email_address=t%40example.com&email_address_confirm=t%40example.com&amount=50&frequency=once-off";

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/donations")
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains(r#"action="https://sandbox.payfast.co.za/eng/process""#));
        assert!(html.contains(r#"name="amount" value="50.00""#));
    }

    #[tokio::test]
    async fn invalid_donation_returns_field_errors() {
        let app = app_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/donations/fields")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"amount":"1"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["error_code"], "VALIDATION_FAILED");
        assert_eq!(json["details"]["amount"], "Minimum donation is R5.00");
        assert_eq!(json["details"]["name_first"], "First name is required");
    }

    #[tokio::test]
    async fn unsigned_notification_is_rejected() {
        let app = app_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/payfast/notify")
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from("m_payment_id=MSI-1000&amount=50.00"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_string(response).await, r#"{"error":"Invalid signature"}"#);
    }

    #[tokio::test]
    async fn middleware_sets_request_id() {
        let server = ServerConfig::default();
        let app = with_middleware(app_router(test_state()), &server);

        let response = app
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let app = app_router(test_state());

        let response = app
            .oneshot(Request::builder().uri("/api/unknown").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
