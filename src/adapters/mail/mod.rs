//! Mail sender adapters.

mod recording_mail_sender;
mod resend_mail_sender;

pub use recording_mail_sender::RecordingMailSender;
pub use resend_mail_sender::{ResendConfig, ResendMailSender};
