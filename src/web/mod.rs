//! Web API module for Letterbox.
//!
//! This module exposes the two letter endpoints (intake and dispatch) as a
//! REST API, plus health and OpenAPI documentation routes.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
