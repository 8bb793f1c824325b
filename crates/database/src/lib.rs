//! SQLite persistence layer for EduDiff Lite.
//!
//! The identity provider owns user profiles; this crate keeps a denormalized
//! copy in a `users` table so the rest of the product can look users up
//! without calling the provider. Writes are merge-upserts keyed by the
//! provider's user id, with write timestamps assigned by the database.
//!
//! # Example
//!
//! ```no_run
//! use database::{user_profile, Database, ProfileUpdate};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:edudiff.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     let update = ProfileUpdate {
//!         email: Some("ada@example.com".to_string()),
//!         first_name: Some("Ada".to_string()),
//!         ..ProfileUpdate::new("user_2abc")
//!     };
//!     user_profile::upsert_profile(db.pool(), &update).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod models;
pub mod user_profile;

pub use error::{DatabaseError, Result};
pub use models::{ProfileUpdate, UserProfile};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    const DEFAULT_POOL_SIZE: u32 = 5;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `sqlite::memory:` for tests.
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!(
            "Connected to database: {} (pool size: {})",
            url,
            pool_size
        );

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// This should be called once after connecting to ensure the schema is up to date.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_migrate_is_idempotent() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        db.migrate().await.unwrap();

        let count = user_profile::count_profiles(db.pool()).await.unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_closed_pool_reports_error() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        db.close().await;

        let result = user_profile::count_profiles(db.pool()).await;
        assert!(matches!(result, Err(DatabaseError::Sqlx(_))));
    }
}
