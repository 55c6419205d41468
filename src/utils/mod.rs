//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Short code generation
//! - [`location`] - `Location` header encoding for redirects

pub mod code_generator;
pub mod location;
