//! Middleware components for the API layer.
//!
//! Currently error handling only; request tracing is attached as a
//! `tower_http::trace::TraceLayer` in `main`.

pub mod error_handler;

pub use error_handler::{ApiError, ApiErrorResponse};
