//! PostgreSQL connection pool setup.
//!
//! The pool is built once at startup from [`DatabaseConfig`] and shared by all
//! repositories. A connection is checked out per query or transaction and goes
//! back to the pool when its guard drops, on success and on error alike.

use std::str::FromStr;
use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use crate::config::{DatabaseConfig, DatabaseTarget};

/// Builds connect options for the configured target.
///
/// # Errors
///
/// Returns [`sqlx::Error::Configuration`] if a `DATABASE_URL` cannot be parsed.
pub fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, sqlx::Error> {
    match &config.target {
        DatabaseTarget::Url(url) => PgConnectOptions::from_str(url),
        DatabaseTarget::Components {
            host,
            port,
            name,
            user,
            password,
        } => Ok(PgConnectOptions::new()
            .host(host)
            .port(*port)
            .database(name)
            .username(user)
            .password(password)),
    }
}

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .max_lifetime(Duration::from_secs(config.max_lifetime))
}

/// Opens the connection pool and verifies the database is reachable.
///
/// # Errors
///
/// Fails if the credentials are rejected or the server cannot be reached
/// within the acquire timeout.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let options = connect_options(config)?;
    pool_options(config).connect_with(options).await
}

/// Applies pending migrations from `./migrations`.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
