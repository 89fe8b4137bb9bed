//! Mail transport that writes messages to the log.

use super::service::{MailError, Mailer, OutgoingMail};
use async_trait::async_trait;
use tracing::{debug, info};

/// A mailer that logs each message instead of delivering it.
///
/// Default backend for development; every "sent" message shows up as an
/// `INFO` event with its full body.
pub struct ConsoleMailer;

impl ConsoleMailer {
    pub fn new() -> Self {
        debug!("Using ConsoleMailer (messages are logged, not delivered)");
        Self
    }
}

impl Default for ConsoleMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for ConsoleMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        info!(
            from = %mail.from,
            to = ?mail.to,
            reply_to = ?mail.reply_to,
            subject = %mail.subject,
            "Outgoing mail\n{}",
            mail.body
        );
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_console_mailer_always_succeeds() {
        let mailer = ConsoleMailer::new();
        let mail = OutgoingMail {
            from: "noreply@localhost".to_string(),
            to: vec!["bob@example.com".to_string()],
            reply_to: None,
            subject: "Hi".to_string(),
            body: "Hello".to_string(),
        };

        assert!(mailer.send(mail).await.is_ok());
        assert_eq!(mailer.backend_name(), "console");
    }
}
