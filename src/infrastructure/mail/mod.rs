//! Outbound mail delivery.
//!
//! Provides a [`Mailer`] trait with two implementations:
//! - [`ConsoleMailer`] - Logs messages (development default)
//! - [`HttpMailer`] - Delivers through an HTTP mail API

mod console_mailer;
mod http_mailer;
mod service;

pub use console_mailer::ConsoleMailer;
pub use http_mailer::HttpMailer;
pub use service::{MailError, Mailer, OutgoingMail};

#[cfg(test)]
pub use service::MockMailer;
