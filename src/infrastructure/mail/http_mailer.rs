//! Mail transport backed by a transactional-mail HTTP API.

use std::time::Duration;

use super::service::{MailError, Mailer, OutgoingMail};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// Request timeout for the mail API.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Posts each message as JSON to a mail provider endpoint.
///
/// The request body is the serialized [`OutgoingMail`]; the API key is sent as
/// a bearer token. Any non-2xx status is reported as [`MailError::Rejected`].
pub struct HttpMailer {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl HttpMailer {
    /// Creates a mailer for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::Transport`] if the HTTP client cannot be built.
    pub fn new(endpoint: Url, api_key: impl Into<String>) -> Result<Self, MailError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MailError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&mail)
            .send()
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(to = ?mail.to, "Mail accepted by provider");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "http"
    }
}
