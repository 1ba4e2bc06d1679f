//! Middleware for the Letterbox Web API.

mod cors;

pub use cors::create_cors_layer;
