//! HTTP API layer.
//!
//! Translates HTTP requests into service calls and formats responses.
//!
//! - [`dto`] - Request/response bodies
//! - [`handlers`] - Request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
