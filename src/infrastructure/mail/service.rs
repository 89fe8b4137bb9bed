//! Mail transport trait and error types.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// A plain-text message ready to be handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingMail {
    pub from: String,
    pub to: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    pub subject: String,
    pub body: String,
}

/// Errors raised by mail transports.
#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail transport unavailable: {0}")]
    Transport(String),
    #[error("mail provider rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Trait for outbound mail delivery.
///
/// # Implementations
///
/// - [`crate::infrastructure::mail::ConsoleMailer`] - Writes messages to the log
/// - [`crate::infrastructure::mail::HttpMailer`] - Posts messages to an HTTP mail API
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Delivers a message. A single attempt; callers decide how to report failure.
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError>;

    /// Short backend name reported by the health check.
    fn backend_name(&self) -> &'static str;
}
