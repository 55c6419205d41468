//! Short URL creation and lookup service.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::NewUrlMapping;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Service for creating and resolving short codes.
///
/// Shortening is not idempotent: submitting the same long URL twice stores two
/// rows under two different codes.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    base_url: String,
    code_length: usize,
}

impl UrlService {
    /// Creates a new URL service.
    ///
    /// `base_url` is the public prefix of short URLs; a trailing `/` is ignored.
    pub fn new(repository: Arc<dyn UrlRepository>, base_url: String, code_length: usize) -> Self {
        Self {
            repository,
            base_url: base_url.trim_end_matches('/').to_string(),
            code_length,
        }
    }

    /// Stores `long_url` under a freshly generated code and returns the code.
    ///
    /// The code is not checked against existing rows. A collision surfaces as
    /// the database's unique violation and is not retried.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ClientInput`] if `long_url` is empty.
    /// Returns [`AppError::Database`] if the insert or commit fails.
    pub async fn add_short_url(&self, long_url: &str) -> Result<String, AppError> {
        if long_url.is_empty() {
            return Err(AppError::client_input("long_url required"));
        }

        let short_code = generate_code(self.code_length);

        let mapping = self
            .repository
            .create(NewUrlMapping {
                long_url: long_url.to_string(),
                short_code,
            })
            .await?;

        debug!(short_code = %mapping.short_code, "Stored URL mapping");

        Ok(mapping.short_code)
    }

    /// Looks up the long URL stored for `short_code`.
    ///
    /// Returns `Ok(None)` when the code is unknown.
    pub async fn get_url_by_short(&self, short_code: &str) -> Result<Option<String>, AppError> {
        self.repository.find_by_short_code(short_code).await
    }

    /// Like [`Self::get_url_by_short`], but an unknown code is an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] with detail `URL not found`.
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        self.get_url_by_short(short_code)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found"))
    }

    /// Joins the base URL and a code into the public short URL.
    pub fn short_url(&self, short_code: &str) -> String {
        format!("{}/{}", self.base_url, short_code)
    }

    /// Checks repository connectivity.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UrlMapping;
    use crate::domain::repositories::MockUrlRepository;
    use chrono::Utc;

    fn service(repo: MockUrlRepository) -> UrlService {
        UrlService::new(Arc::new(repo), "http://localhost:8000/".to_string(), 8)
    }

    fn echo_create(repo: &mut MockUrlRepository) {
        repo.expect_create().returning(|new_mapping| {
            Ok(UrlMapping::new(
                1,
                new_mapping.long_url,
                new_mapping.short_code,
                Utc::now(),
            ))
        });
    }

    #[tokio::test]
    async fn test_add_short_url_returns_generated_code() {
        let mut repo = MockUrlRepository::new();
        repo.expect_create()
            .withf(|m| {
                m.long_url == "https://example.com"
                    && m.short_code.len() == 8
                    && m.short_code.chars().all(|c| c.is_ascii_alphanumeric())
            })
            .times(1)
            .returning(|m| Ok(UrlMapping::new(1, m.long_url, m.short_code, Utc::now())));

        let code = service(repo)
            .add_short_url("https://example.com")
            .await
            .unwrap();

        assert_eq!(code.len(), 8);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[tokio::test]
    async fn test_add_short_url_respects_code_length() {
        let mut repo = MockUrlRepository::new();
        echo_create(&mut repo);

        let service = UrlService::new(Arc::new(repo), "http://localhost:8000".to_string(), 12);
        let code = service.add_short_url("https://example.com").await.unwrap();

        assert_eq!(code.len(), 12);
    }

    #[tokio::test]
    async fn test_add_short_url_empty_is_client_error() {
        let mut repo = MockUrlRepository::new();
        repo.expect_create().times(0);

        let result = service(repo).add_short_url("").await;

        assert!(matches!(result, Err(AppError::ClientInput(_))));
    }

    #[tokio::test]
    async fn test_add_short_url_same_url_twice_creates_two_codes() {
        let mut repo = MockUrlRepository::new();
        repo.expect_create()
            .times(2)
            .returning(|m| Ok(UrlMapping::new(1, m.long_url, m.short_code, Utc::now())));

        let service = service(repo);
        let first = service.add_short_url("https://example.com").await.unwrap();
        let second = service.add_short_url("https://example.com").await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_add_short_url_propagates_database_error() {
        let mut repo = MockUrlRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|_| Err(AppError::Database(sqlx::Error::PoolTimedOut)));

        let result = service(repo).add_short_url("https://example.com").await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }

    #[tokio::test]
    async fn test_get_url_by_short_found() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_short_code()
            .withf(|code| code == "aB3dE6gH")
            .times(1)
            .returning(|_| Ok(Some("https://example.com".to_string())));

        let result = service(repo).get_url_by_short("aB3dE6gH").await.unwrap();

        assert_eq!(result.as_deref(), Some("https://example.com"));
    }

    #[tokio::test]
    async fn test_get_url_by_short_absent() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_short_code()
            .times(1)
            .returning(|_| Ok(None));

        let result = service(repo).get_url_by_short("missing1").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_resolve_absent_is_not_found() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_short_code().returning(|_| Ok(None));

        let err = service(repo).resolve("missing1").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(ref m) if m == "URL not found"));
    }

    #[test]
    fn test_short_url_joins_base_and_code() {
        let service = service(MockUrlRepository::new());
        assert_eq!(
            service.short_url("aB3dE6gH"),
            "http://localhost:8000/aB3dE6gH"
        );
    }
}
