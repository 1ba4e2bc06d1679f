//! Mail transport for Letterbox.
//!
//! The dispatch job depends on an external email-sending capability; this
//! module defines the trait seam and the Resend-backed implementation.

mod resend;
mod transport;

pub use resend::ResendMailer;
pub use transport::{MailTransport, OutboundMessage};
