//! HTTP server layer
//!
//! Axum server with:
//! - Permissive CORS
//! - Request tracing and a diagnostic log line
//! - Graceful shutdown
//! - JSON error responses
//! - OpenAPI description of every route

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use openapi::ApiDoc;
pub use server::{build_router, run_server, ServerConfig, ServerError, DEFAULT_PORT};
