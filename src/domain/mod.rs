//! Domain layer: entities and repository interfaces.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on the infrastructure or API layers.

pub mod entities;
pub mod repositories;
