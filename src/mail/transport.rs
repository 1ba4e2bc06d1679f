//! Mail transport trait abstraction.

use async_trait::async_trait;

use crate::Result;

/// A single outbound email.
#[derive(Debug, Clone)]
pub struct OutboundMessage {
    /// From-address.
    pub from: String,
    /// Destination address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub text: String,
}

/// Capability for sending email through an external provider.
///
/// Failures surface as [`crate::LetterboxError::Transport`]; the caller
/// decides whether a failure is fatal (dispatch records it as the letter's
/// status and moves on).
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Deliver one message.
    async fn send(&self, message: &OutboundMessage) -> Result<()>;
}
