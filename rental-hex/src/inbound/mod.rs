//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the feature services.

mod handlers;
mod server;

pub use handlers::{ApiError, AppState, GENERIC_ERROR_MESSAGE, INVALID_BODY_MESSAGE, JsonBody};
pub use server::HttpServer;
