//! Letterbox - delayed letter delivery service.
//!
//! Users submit a letter with a future delivery date; a recurring dispatch
//! job emails each letter through an external mail provider once its date
//! arrives.

pub mod config;
pub mod datetime;
pub mod db;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod mail;
pub mod web;

pub use config::Config;
pub use db::{Database, Letter, LetterRepository, LetterStatus, NewLetter};
pub use dispatch::{DispatchOutcome, Dispatcher, DEFAULT_BATCH_SIZE};
pub use error::{LetterboxError, Result};
pub use mail::{MailTransport, OutboundMessage, ResendMailer};
pub use web::WebServer;
