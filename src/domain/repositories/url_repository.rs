//! Repository trait for URL mapping data access.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `urls` table.
///
/// Each call checks a connection out of the pool and returns it before the
/// future completes, whether the call succeeds or fails.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new mapping inside a transaction and commits it.
    ///
    /// No existence check is performed on the short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on any database failure, including a
    /// unique violation on the short code.
    async fn create(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError>;

    /// Finds the long URL stored for a short code.
    ///
    /// Matching is exact and case-sensitive. Returns `Ok(None)` if no row matches.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database failures.
    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<String>, AppError>;

    /// Checks that the backing store answers queries.
    async fn ping(&self) -> Result<(), AppError>;

    /// Counts stored mappings.
    async fn count(&self) -> Result<i64, AppError>;
}
