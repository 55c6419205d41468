#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use sqlx::PgPool;
use std::sync::{Arc, Mutex};
use url_shortener::api::routes::public_routes;
use url_shortener::application::services::UrlService;
use url_shortener::domain::entities::{NewUrlMapping, UrlMapping};
use url_shortener::domain::repositories::UrlRepository;
use url_shortener::error::AppError;
use url_shortener::infrastructure::persistence::PgUrlRepository;
use url_shortener::state::AppState;

pub const BASE_URL: &str = "http://localhost:8000";

/// Repository backed by a vector, for HTTP tests that do not need PostgreSQL.
#[derive(Default)]
pub struct InMemoryUrlRepository {
    rows: Mutex<Vec<UrlMapping>>,
}

impl InMemoryUrlRepository {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn insert(&self, short_code: &str, long_url: &str) {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i64 + 1;
        rows.push(UrlMapping::new(
            id,
            long_url.to_string(),
            short_code.to_string(),
            Utc::now(),
        ));
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn create(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let mapping = UrlMapping::new(
            rows.len() as i64 + 1,
            new_mapping.long_url,
            new_mapping.short_code,
            Utc::now(),
        );
        rows.push(mapping.clone());
        Ok(mapping)
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<String>, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|m| m.short_code == short_code)
            .map(|m| m.long_url.clone()))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.len() as i64)
    }
}

/// Repository whose every call fails like an unreachable database.
pub struct FailingUrlRepository;

#[async_trait]
impl UrlRepository for FailingUrlRepository {
    async fn create(&self, _new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_short_code(&self, _short_code: &str) -> Result<Option<String>, AppError> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }
}

pub fn state_with(repository: Arc<dyn UrlRepository>) -> AppState {
    AppState::new(Arc::new(UrlService::new(
        repository,
        BASE_URL.to_string(),
        8,
    )))
}

pub fn create_test_state(pool: PgPool) -> AppState {
    state_with(Arc::new(PgUrlRepository::new(Arc::new(pool))))
}

pub fn memory_app() -> (Router, Arc<InMemoryUrlRepository>) {
    let repository = Arc::new(InMemoryUrlRepository::default());
    let app = public_routes().with_state(state_with(repository.clone()));
    (app, repository)
}

pub fn failing_app() -> Router {
    public_routes().with_state(state_with(Arc::new(FailingUrlRepository)))
}

pub fn pg_app(pool: PgPool) -> Router {
    public_routes().with_state(create_test_state(pool))
}

pub async fn insert_mapping(pool: &PgPool, short_code: &str, long_url: &str) {
    sqlx::query("INSERT INTO urls (long_url, short_url) VALUES ($1, $2)")
        .bind(long_url)
        .bind(short_code)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_rows(pool: &PgPool, long_url: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls WHERE long_url = $1")
        .bind(long_url)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Extracts the code from a `shorten_url` value.
pub fn code_from_short_url(short_url: &str) -> String {
    short_url
        .strip_prefix(&format!("{}/", BASE_URL))
        .expect("short URL starts with the base URL")
        .to_string()
}
