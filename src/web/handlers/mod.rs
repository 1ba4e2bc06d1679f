//! API handlers for the Letterbox Web API.

pub mod letters;

pub use letters::*;

use std::sync::Arc;

use crate::db::Database;
use crate::dispatch::DEFAULT_BATCH_SIZE;
use crate::mail::MailTransport;

/// Shared state for API handlers.
pub struct AppState {
    /// Letter store.
    pub db: Database,
    /// Outbound mail transport, if configured.
    pub mailer: Option<Arc<dyn MailTransport>>,
    /// From-address for outbound letters, if configured.
    pub from_email: Option<String>,
    /// Maximum due letters handled per dispatch invocation.
    pub dispatch_batch_size: u32,
}

impl AppState {
    /// Create state without a mail transport (intake-only).
    pub fn new(db: Database) -> Self {
        Self {
            db,
            mailer: None,
            from_email: None,
            dispatch_batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Attach a mail transport and from-address.
    pub fn with_mailer(
        mut self,
        mailer: Arc<dyn MailTransport>,
        from_email: impl Into<String>,
    ) -> Self {
        self.mailer = Some(mailer);
        self.from_email = Some(from_email.into());
        self
    }

    /// Override the dispatch batch size.
    pub fn with_dispatch_batch_size(mut self, batch_size: u32) -> Self {
        self.dispatch_batch_size = batch_size;
        self
    }
}
