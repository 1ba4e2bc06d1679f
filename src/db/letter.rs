//! Letter model for Letterbox.
//!
//! This module defines the Letter entity and its lifecycle status.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

/// Lifecycle status of a letter.
///
/// Transitions are one-way: `Pending -> Sent` or `Pending -> Failed`,
/// exactly once. A failed letter is never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
pub enum LetterStatus {
    /// Waiting for its delivery date.
    #[default]
    Pending,
    /// Delivered through the mail transport.
    Sent,
    /// The mail transport rejected it; permanently abandoned.
    Failed,
}

impl LetterStatus {
    /// Convert status to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            LetterStatus::Pending => "pending",
            LetterStatus::Sent => "sent",
            LetterStatus::Failed => "failed",
        }
    }

    /// Whether dispatch may still pick this letter up.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LetterStatus::Pending)
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LetterStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(LetterStatus::Pending),
            "sent" => Ok(LetterStatus::Sent),
            "failed" => Ok(LetterStatus::Failed),
            _ => Err(format!("unknown letter status: {s}")),
        }
    }
}

/// Letter entity as stored in the letters table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Letter {
    /// Unique letter ID (UUID v4).
    pub id: String,
    /// Destination email address.
    pub recipient_email: String,
    /// Subject line.
    pub subject: String,
    /// Letter body.
    pub content: String,
    /// Delivery date as unix seconds (UTC).
    pub delivery_date: i64,
    /// Lifecycle status.
    pub status: LetterStatus,
    /// Whether the letter may be publicly listed. Unused by dispatch.
    pub is_public: bool,
    /// Creation timestamp as unix seconds (UTC).
    pub created_at: i64,
}

impl Letter {
    /// Whether this letter is due for delivery at the given time.
    pub fn is_due(&self, now: i64) -> bool {
        self.status == LetterStatus::Pending && self.delivery_date <= now
    }
}

/// Data for creating a new letter.
///
/// The ID is generated here; status and timestamps are fixed at insert.
#[derive(Debug, Clone)]
pub struct NewLetter {
    /// Unique letter ID (UUID v4).
    pub id: String,
    /// Destination email address.
    pub recipient_email: String,
    /// Subject line.
    pub subject: String,
    /// Letter body.
    pub content: String,
    /// Delivery date as unix seconds (UTC).
    pub delivery_date: i64,
    /// Whether the letter may be publicly listed.
    pub is_public: bool,
    /// Creation timestamp as unix seconds (UTC).
    pub created_at: i64,
}

impl NewLetter {
    /// Create a new letter with a freshly generated ID.
    pub fn new(
        recipient_email: impl Into<String>,
        subject: impl Into<String>,
        content: impl Into<String>,
        delivery_date: i64,
        is_public: bool,
        created_at: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            recipient_email: recipient_email.into(),
            subject: subject.into(),
            content: content.into(),
            delivery_date,
            is_public,
            created_at,
        }
    }
}
