//! Due-letter dispatch for Letterbox.
//!
//! A dispatch invocation scans the letters table for pending letters whose
//! delivery date has passed, attempts delivery for each through the mail
//! transport, and records the outcome as the letter's final status. The
//! job is intended to run on a recurring schedule (e.g. every minute) by
//! an external trigger; the trigger itself is out of scope.

use tracing::{debug, info, warn};

use crate::db::{DbPool, LetterRepository, LetterStatus};
use crate::mail::{MailTransport, OutboundMessage};
use crate::Result;

/// Default number of due letters processed per invocation.
///
/// Bounds worst-case invocation duration. Under sustained backlog, due
/// letters beyond the oldest `batch_size` are deferred to the next run.
pub const DEFAULT_BATCH_SIZE: u32 = 50;

/// Counters for one dispatch invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Number of due letters picked up.
    pub processed: usize,
    /// Letters delivered and marked 'sent'.
    pub sent: usize,
    /// Letters rejected by the transport and marked 'failed'.
    pub failed: usize,
}

/// One-shot batch job that delivers due letters.
///
/// Built per invocation from explicit collaborators; holds no state of
/// its own between runs.
pub struct Dispatcher<'a> {
    pool: &'a DbPool,
    transport: &'a dyn MailTransport,
    from_email: &'a str,
    batch_size: u32,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher with the default batch size.
    pub fn new(pool: &'a DbPool, transport: &'a dyn MailTransport, from_email: &'a str) -> Self {
        Self {
            pool,
            transport,
            from_email,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Set the maximum number of due letters handled this invocation.
    pub fn with_batch_size(mut self, batch_size: u32) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Run one dispatch invocation against the given current time.
    ///
    /// Letters are handled strictly sequentially: each letter is fully
    /// processed (send, then status write) before the next one starts.
    /// A transport failure is recorded on that letter and never aborts
    /// the rest of the batch; a storage failure aborts the invocation.
    pub async fn run(&self, now: i64) -> Result<DispatchOutcome> {
        let repo = LetterRepository::new(self.pool);

        let due = repo.list_due_pending(now, self.batch_size as i64).await?;

        if due.is_empty() {
            debug!("No pending letters ready to send");
            return Ok(DispatchOutcome::default());
        }

        let mut sent = 0;
        let mut failed = 0;

        for letter in &due {
            let message = OutboundMessage {
                from: self.from_email.to_string(),
                to: letter.recipient_email.clone(),
                subject: letter.subject.clone(),
                text: letter.content.clone(),
            };

            match self.transport.send(&message).await {
                Ok(()) => {
                    repo.update_status(&letter.id, LetterStatus::Sent).await?;
                    sent += 1;
                }
                Err(e) => {
                    warn!(letter_id = %letter.id, error = %e, "Failed to send letter");
                    repo.update_status(&letter.id, LetterStatus::Failed).await?;
                    failed += 1;
                }
            }
        }

        let outcome = DispatchOutcome {
            processed: due.len(),
            sent,
            failed,
        };
        info!(
            processed = outcome.processed,
            sent = outcome.sent,
            failed = outcome.failed,
            "Dispatch complete"
        );
        Ok(outcome)
    }
}
