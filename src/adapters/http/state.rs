//! Shared application state for HTTP handlers.

use rust_decimal::Decimal;
use secrecy::SecretString;
use std::sync::Arc;

use crate::application::handlers::{
    ForwardApplicationHandler, HandlePaymentNotificationHandler, PrepareDonationHandler,
    SubmitContactHandler,
};
use crate::config::AppConfig;
use crate::domain::donation::GatewaySettings;
use crate::domain::enquiry::RecipientPolicy;
use crate::domain::notification::NotificationVerifier;
use crate::ports::{MailSender, NotificationStore};

/// Shared application state containing all dependencies.
///
/// Cloned for each request; ports are Arc-wrapped for cheap sharing.
#[derive(Clone)]
pub struct AppState {
    pub gateway: GatewaySettings,
    pub minimum_amount: Decimal,
    pub verifier: NotificationVerifier,
    pub notification_store: Arc<dyn NotificationStore>,
    pub mail_sender: Arc<dyn MailSender>,
    pub recipients: RecipientPolicy,
}

impl AppState {
    /// Builds state from loaded configuration and the chosen adapters.
    pub fn from_config(
        config: &AppConfig,
        notification_store: Arc<dyn NotificationStore>,
        mail_sender: Arc<dyn MailSender>,
    ) -> Self {
        Self {
            gateway: config.gateway_settings(),
            minimum_amount: config.payfast.minimum_amount,
            verifier: NotificationVerifier::new(SecretString::new(
                config.payfast.merchant_secret.clone(),
            )),
            notification_store,
            mail_sender,
            recipients: RecipientPolicy::new(
                config.email.default_recipient.clone(),
                config.email.allowed_recipients_list(),
            ),
        }
    }

    /// Create handlers on demand from the shared state.
    pub fn prepare_donation_handler(&self) -> PrepareDonationHandler {
        PrepareDonationHandler::new(self.gateway.clone(), self.minimum_amount)
    }

    pub fn notification_handler(&self) -> HandlePaymentNotificationHandler {
        HandlePaymentNotificationHandler::new(
            self.verifier.clone(),
            self.notification_store.clone(),
        )
    }

    pub fn contact_handler(&self) -> SubmitContactHandler {
        SubmitContactHandler::new()
    }

    pub fn application_handler(&self) -> ForwardApplicationHandler {
        ForwardApplicationHandler::new(self.mail_sender.clone(), self.recipients.clone())
    }
}
