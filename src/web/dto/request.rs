//! Request DTOs for the Web API.

use serde::Deserialize;
use utoipa::ToSchema;

/// Letter creation request.
///
/// Fields default so that an absent field reaches the handler's presence
/// check (which answers 400) instead of failing deserialization.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLetterRequest {
    /// Destination email address.
    #[serde(default)]
    pub recipient_email: String,
    /// Subject line.
    #[serde(default)]
    pub subject: String,
    /// Letter body.
    #[serde(default)]
    pub content: String,
    /// Delivery date as a unix timestamp. Seconds are expected;
    /// millisecond values are detected and normalized.
    #[serde(default)]
    pub delivery_date: i64,
    /// Whether the letter may be publicly listed (optional).
    #[serde(default)]
    pub is_public: bool,
}
