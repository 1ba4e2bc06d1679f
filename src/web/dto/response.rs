//! Response DTOs for the Web API.

use serde::Serialize;
use utoipa::ToSchema;

use crate::dispatch::DispatchOutcome;

/// Letter creation response.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateLetterResponse {
    /// Always true on the success path.
    pub success: bool,
    /// ID of the stored letter.
    pub id: String,
}

/// Dispatch invocation response.
#[derive(Debug, Serialize, ToSchema)]
pub struct DispatchResponse {
    /// Number of due letters picked up.
    pub processed: usize,
    /// Letters delivered and marked 'sent'.
    pub sent: usize,
    /// Letters rejected by the transport and marked 'failed'.
    pub failed: usize,
    /// Present only on the fast no-op path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DispatchResponse {
    /// Build the wire response for a dispatch outcome.
    pub fn from_outcome(outcome: DispatchOutcome) -> Self {
        let message = if outcome.processed == 0 {
            Some("No pending letters ready to send.".to_string())
        } else {
            None
        };
        Self {
            processed: outcome.processed,
            sent: outcome.sent,
            failed: outcome.failed,
            message,
        }
    }
}
