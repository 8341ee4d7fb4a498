//! API layer for the task tracker.
//!
//! HTTP endpoints built on axum 0.8.
//!
//! # Modules
//!
//! - [`dto`]: Data Transfer Objects for requests and responses
//! - [`handlers`]: axum handlers for the task endpoints
//! - [`middleware`]: error handling
//! - [`routes`]: route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use routes::create_router;
