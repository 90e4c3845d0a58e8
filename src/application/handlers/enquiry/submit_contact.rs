//! SubmitContactHandler - Accepts contact form messages.

use crate::domain::enquiry::ContactMessage;

/// Command carrying a contact form submission.
#[derive(Debug, Clone)]
pub struct SubmitContactCommand {
    pub message: ContactMessage,
}

/// Handler for contact form submissions.
///
/// Messages are written to the structured log for the site team to pick up.
#[derive(Debug, Default)]
pub struct SubmitContactHandler;

impl SubmitContactHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: SubmitContactCommand) {
        let message = cmd.message;
        tracing::info!(
            name = %message.name,
            email = %message.email,
            subject = %message.subject,
            message = %message.message,
            "Contact form submission"
        );
    }
}
