//! CLI administration tool for url-shortener.
//!
//! Runs the same store operations as the HTTP service directly against the
//! database, plus a few connection diagnostics.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//!
//! # Server version and stored mapping count
//! cargo run --bin admin -- db info
//!
//! # Create a mapping
//! cargo run --bin admin -- shorten https://example.com
//!
//! # Look up a code
//! cargo run --bin admin -- resolve aB3dE6gH
//! ```
//!
//! Reads the same environment variables as the server (`DATABASE_URL` or
//! `DB_HOST`/`DB_PORT`/`DB_NAME`/`DB_USER`/`DB_PASSWORD`, `BASE_URL`,
//! `SHORT_CODE_LENGTH`).

use url_shortener::config::{self, Config};
use url_shortener::domain::repositories::UrlRepository;
use url_shortener::infrastructure::database;
use url_shortener::infrastructure::persistence::PgUrlRepository;
use url_shortener::server::build_state;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing url-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Create a short URL
    Shorten {
        /// The long URL to store
        long_url: String,
    },

    /// Print the long URL stored for a short code
    Resolve {
        /// Short code to look up (case-sensitive)
        short_code: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = database::connect(&config.database)
        .await
        .with_context(|| format!("Failed to connect to {}", config.database.describe()))?;

    let found = match cli.command {
        Commands::Db { action } => {
            handle_db_action(action, &pool).await?;
            true
        }
        Commands::Shorten { long_url } => {
            shorten(&pool, &config, &long_url).await?;
            true
        }
        Commands::Resolve { short_code } => resolve(&pool, &config, &short_code).await?,
    };

    pool.close().await;

    if !found {
        std::process::exit(1);
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").execute(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            println!("{}", "Applying migrations...".bright_blue());

            database::migrate(pool)
                .await
                .context("Failed to apply migrations")?;

            println!("{}", "Migrations applied".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let repository = PgUrlRepository::new(Arc::new(pool.clone()));
            let mappings = repository
                .count()
                .await
                .context("Failed to count mappings (run `admin db migrate` first?)")?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Mappings:   {}", mappings.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}

/// Stores a mapping through the same service the HTTP handler uses.
async fn shorten(pool: &PgPool, config: &Config, long_url: &str) -> Result<()> {
    let state = build_state(pool.clone(), config);

    let code = state
        .url_service
        .add_short_url(long_url)
        .await
        .context("Failed to shorten URL")?;

    println!("{}", state.url_service.short_url(&code).bright_green().bold());

    Ok(())
}

/// Prints the long URL for a code. Returns `false` if the code is unknown.
async fn resolve(pool: &PgPool, config: &Config, short_code: &str) -> Result<bool> {
    let state = build_state(pool.clone(), config);

    let long_url = state
        .url_service
        .get_url_by_short(short_code)
        .await
        .context("Lookup failed")?;

    match long_url {
        Some(url) => {
            println!("{}", url.bright_white());
            Ok(true)
        }
        None => {
            eprintln!("{} {}", "URL not found:".red().bold(), short_code);
            Ok(false)
        }
    }
}
