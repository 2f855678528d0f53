//! Connection pool and schema lifecycle for the SQLite store.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info, instrument};

use crate::config::DatabaseConfig;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id         INTEGER PRIMARY KEY,
        first_name TEXT NOT NULL,
        last_name  TEXT NOT NULL,
        email      TEXT NOT NULL UNIQUE,
        password   TEXT NOT NULL,
        role       TEXT NOT NULL
    )
"#;

const CREATE_CUSTOMERS: &str = r#"
    CREATE TABLE IF NOT EXISTS customers (
        id         INTEGER PRIMARY KEY,
        first_name TEXT NOT NULL,
        last_name  TEXT NOT NULL,
        email      TEXT NOT NULL UNIQUE,
        password   TEXT NOT NULL
    )
"#;

const CREATE_ADDRESS: &str = r#"
    CREATE TABLE IF NOT EXISTS address (
        id          INTEGER PRIMARY KEY,
        street      TEXT NOT NULL,
        city        TEXT NOT NULL,
        state       TEXT NOT NULL,
        zipcode     TEXT NOT NULL,
        customer_id INTEGER NOT NULL REFERENCES customers(id)
    )
"#;

/// Shared handle to the relational store. Cloning is cheap; all clones use the same pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the pool described by `config`, creating the database file if needed.
    #[instrument(skip(config), fields(url = %config.url))]
    pub async fn connect(config: &DatabaseConfig) -> RepositoryResult<Self> {
        info!("Connecting to database");
        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| RepositoryError::connection(format!("Invalid database URL: {}", e)))?
            .create_if_missing(true)
            .foreign_keys(true);

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.pool_size)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_secs));

        // Closing the last connection to an in-memory database discards it.
        if config.is_in_memory() {
            pool_options = pool_options
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options.connect_with(options).await?;
        info!("Database connection pool ready");
        Ok(Database { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the `users`, `customers` and `address` tables if they do not exist yet.
    #[instrument(skip(self))]
    pub async fn create_all(&self) -> RepositoryResult<()> {
        for statement in [CREATE_USERS, CREATE_CUSTOMERS, CREATE_ADDRESS] {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        debug!("Schema created");
        Ok(())
    }

    /// Drop every table. `address` goes first because it references `customers`.
    #[instrument(skip(self))]
    pub async fn drop_all(&self) -> RepositoryResult<()> {
        for table in ["address", "customers", "users"] {
            sqlx::query(&format!("DROP TABLE IF EXISTS {}", table))
                .execute(&self.pool)
                .await?;
        }
        debug!("Schema dropped");
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
