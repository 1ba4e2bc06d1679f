//! Resend-backed mail transport.
//!
//! Sends email through the Resend HTTP API (`POST /emails` with a Bearer
//! API key).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use super::transport::{MailTransport, OutboundMessage};
use crate::error::{LetterboxError, Result};

/// Resend API endpoint for sending a single email.
const SEND_URL: &str = "https://api.resend.com/emails";

/// Connect timeout in seconds.
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Total request timeout in seconds.
const TOTAL_TIMEOUT_SECS: u64 = 30;

/// User agent string for API requests.
const USER_AGENT: &str = "letterbox/0.1";

/// Request body for the Resend send-email endpoint.
#[derive(Serialize)]
struct SendEmailBody<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

/// Mail transport backed by the Resend HTTP API.
pub struct ResendMailer {
    client: Client,
    api_key: String,
    send_url: String,
}

impl ResendMailer {
    /// Create a new mailer with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(TOTAL_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                LetterboxError::Transport(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            send_url: SEND_URL.to_string(),
        })
    }

    /// Override the API endpoint, e.g. to point at a local stub server.
    pub fn with_send_url(mut self, url: impl Into<String>) -> Self {
        self.send_url = url.into();
        self
    }
}

#[async_trait]
impl MailTransport for ResendMailer {
    async fn send(&self, message: &OutboundMessage) -> Result<()> {
        let body = SendEmailBody {
            from: &message.from,
            to: &message.to,
            subject: &message.subject,
            text: &message.text,
        };

        let response = self
            .client
            .post(&self.send_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                LetterboxError::Transport(format!("failed to reach mail provider: {e}"))
            })?;

        if !response.status().is_success() {
            return Err(LetterboxError::Transport(format!(
                "mail provider returned {}",
                response.status()
            )));
        }

        Ok(())
    }
}
