//! Mailer double that records outgoing messages.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use blog::infrastructure::mail::{MailError, Mailer, OutgoingMail};

/// Mailer that keeps every message instead of delivering it.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutgoingMail>>,
    failing: AtomicBool,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following `send` fail with a transport error.
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(MailError::Transport("connection refused".to_string()));
        }
        self.sent.lock().unwrap().push(mail);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "recording"
    }
}
