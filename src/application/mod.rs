//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide the API that HTTP handlers
//! and the admin CLI call.
//!
//! - [`services::url_service::UrlService`] - Short code creation and lookup

pub mod services;
