//! Core domain entities.
//!
//! - [`UrlMapping`] - A stored short code mapping
//! - [`NewUrlMapping`] - Input for creating one

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping};
