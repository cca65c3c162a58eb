//! Database connection pool configuration.
//!
//! The pool is bounded on both dimensions that matter under load: a maximum
//! connection count and an acquire timeout. A request that cannot get a
//! connection within the timeout fails fast instead of queueing unboundedly.
//! Every durable operation goes through this pool.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `DATABASE_MAX_CONNECTIONS`: Pool size (default 10)
//! - `DATABASE_ACQUIRE_TIMEOUT_SECS`: Acquire wait bound (default 5)

use std::env;
use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    /// # Panics
    ///
    /// Panics if `DATABASE_URL` is not set.
    pub fn from_env() -> Self {
        Self {
            url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            acquire_timeout_secs: env::var("DATABASE_ACQUIRE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
        }
    }
}

/// Initializes the PostgreSQL connection pool from the environment.
///
/// Called once during startup; the returned pool is cheaply cloneable and is
/// passed into [`crate::state::AppState`] for use in request handlers.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is not set or the database is unreachable.
pub async fn init_db_pool() -> PgPool {
    let config = DatabaseConfig::from_env();

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.url)
        .await
        .expect("Failed to connect to database")
}
