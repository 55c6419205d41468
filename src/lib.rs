//! # URL Shortener
//!
//! A small URL shortening service built with Axum and PostgreSQL. It accepts a
//! long URL, stores it under a random alphanumeric code and redirects requests
//! for that code back to the original URL.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Code generation and lookup logic
//! - **Infrastructure Layer** ([`infrastructure`]) - Connection pool and PostgreSQL repository
//! - **API Layer** ([`api`]) - Handlers, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export DB_HOST=localhost DB_PORT=5432 DB_NAME=urls DB_USER=postgres DB_PASSWORD=secret
//! cargo run
//!
//! curl -X POST localhost:8000/shorten -H 'content-type: application/json' \
//!      -d '{"long_url":"https://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Loaded once from environment variables via [`config::load_from_env`].

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod routes;
pub mod server;
pub mod state;
pub mod utils;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers and integration tests.
pub mod prelude {
    pub use crate::application::services::UrlService;
    pub use crate::domain::entities::{NewUrlMapping, UrlMapping};
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
