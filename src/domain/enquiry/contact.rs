//! Contact form message.

use serde::Deserialize;

use super::OutgoingMail;
use crate::domain::foundation::html_escape;

/// A message submitted through the site's contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactMessage {
    /// Formats the message as an email to `recipient`, replying to the sender.
    pub fn to_mail(&self, recipient: &str) -> OutgoingMail {
        let html = format!(
            "<h3>New Contact Form Submission</h3>\
             <p><strong>Name:</strong> {}</p>\
             <p><strong>Email:</strong> {}</p>\
             <p><strong>Message:</strong></p>\
             <p>{}</p>",
            html_escape(&self.name),
            html_escape(&self.email),
            html_escape(&self.message),
        );
        let text = format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        );

        OutgoingMail {
            to: recipient.to_string(),
            subject: format!("Contact Form: {}", self.subject),
            html,
            text,
            reply_to: (!self.email.trim().is_empty()).then(|| self.email.trim().to_string()),
        }
    }
}
