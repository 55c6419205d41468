//! Infrastructure layer: concrete implementations of domain interfaces.
//!
//! - [`database`] - Connection pool setup and migrations
//! - [`persistence`] - PostgreSQL repository implementations

pub mod database;
pub mod persistence;
