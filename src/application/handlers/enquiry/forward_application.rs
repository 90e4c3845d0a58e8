//! ForwardApplicationHandler - Emails application form submissions to the team.

use std::sync::Arc;

use crate::domain::enquiry::{ApplicationSubmission, RecipientPolicy};
use crate::ports::{MailError, MailSender};

/// Command carrying an application submission.
#[derive(Debug, Clone)]
pub struct ForwardApplicationCommand {
    pub submission: ApplicationSubmission,
}

/// Handler that formats an application and sends it by email.
pub struct ForwardApplicationHandler {
    mail_sender: Arc<dyn MailSender>,
    recipients: RecipientPolicy,
}

impl ForwardApplicationHandler {
    pub fn new(mail_sender: Arc<dyn MailSender>, recipients: RecipientPolicy) -> Self {
        Self {
            mail_sender,
            recipients,
        }
    }

    pub async fn handle(&self, cmd: ForwardApplicationCommand) -> Result<(), MailError> {
        if let Some(requested) = cmd.submission.to.as_deref() {
            if !requested.trim().is_empty() && !self.recipients.allows(requested) {
                tracing::warn!(
                    requested,
                    "Application recipient not allowed; using default recipient"
                );
            }
        }
        let mail = cmd.submission.to_mail(&self.recipients);
        let application_type = cmd.submission.application_type;

        self.mail_sender.send(mail).await.map_err(|err| {
            tracing::error!(
                application_type = %application_type,
                error = %err,
                "Failed to forward application"
            );
            err
        })?;

        tracing::info!(application_type = %application_type, "Application forwarded");
        Ok(())
    }
}
