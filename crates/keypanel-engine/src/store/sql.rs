//! SQL account store.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::any::{AnyPoolOptions, AnyRow};
use sqlx::{AnyPool, Row};

use crate::error::EngineError;
use crate::record::AccountRecord;

use super::queries;
use super::traits::AccountStore;

/// Database dialect, used for query selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlDialect {
    /// PostgreSQL database.
    PostgreSQL,
    /// MySQL/MariaDB database.
    MySQL,
    /// SQLite database.
    SQLite,
}

impl SqlDialect {
    /// Detect dialect from a connection URL.
    pub fn from_url(url: &str) -> Option<Self> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Some(Self::PostgreSQL)
        } else if url.starts_with("mysql://") || url.starts_with("mariadb://") {
            Some(Self::MySQL)
        } else if url.starts_with("sqlite:") {
            Some(Self::SQLite)
        } else {
            None
        }
    }
}

/// Connection configuration for [`SqlStore`].
#[derive(Debug, Clone)]
pub struct SqlStoreConfig {
    /// Connection URL (`postgres://`, `mysql://`, or `sqlite:`).
    pub database_url: String,
    /// Maximum pool connections.
    pub max_connections: u32,
    /// Pool acquire timeout.
    pub connect_timeout: Duration,
}

impl SqlStoreConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 10,
            connect_timeout: Duration::from_secs(30),
        }
    }

    pub fn max_connections(mut self, n: u32) -> Self {
        self.max_connections = n;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

/// SQL-backed account store.
///
/// Supports PostgreSQL, MySQL, and SQLite through SQLx.
///
/// # Example
///
/// ```ignore
/// use keypanel_engine::{SqlStore, SqlStoreConfig};
///
/// let store = SqlStore::connect(SqlStoreConfig::new("sqlite:accounts.db")).await?;
/// store.migrate().await?;
/// ```
pub struct SqlStore {
    pool: AnyPool,
    dialect: SqlDialect,
}

impl SqlStore {
    /// Connect to the database.
    pub async fn connect(config: SqlStoreConfig) -> Result<Self, EngineError> {
        // Install database drivers for the "any" pool
        sqlx::any::install_default_drivers();

        let dialect = SqlDialect::from_url(&config.database_url)
            .ok_or_else(|| EngineError::store("unsupported database URL scheme"))?;

        let pool = AnyPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout)
            .connect(&config.database_url)
            .await?;

        Ok(Self { pool, dialect })
    }

    /// Create the accounts table if it does not exist.
    pub async fn migrate(&self) -> Result<(), EngineError> {
        sqlx::query(queries::CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Get the connection pool (for advanced usage).
    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    /// Get the detected dialect.
    pub fn dialect(&self) -> SqlDialect {
        self.dialect
    }

    fn parse_row(row: &AnyRow) -> Result<AccountRecord, EngineError> {
        Ok(AccountRecord {
            username: row.try_get("username")?,
            password_digest: row.try_get("password_digest")?,
            created_at: row.try_get("created_at")?,
            trial_days: row.try_get::<Option<i64>, _>("trial_days")?,
            expires_at: row.try_get::<Option<i64>, _>("expires_at")?,
            bound_device: row.try_get::<Option<String>, _>("bound_device")?,
        })
    }
}

#[async_trait]
impl AccountStore for SqlStore {
    async fn get(&self, username: &str) -> Result<Option<AccountRecord>, EngineError> {
        let query = match self.dialect {
            SqlDialect::PostgreSQL => queries::FIND_PG,
            SqlDialect::MySQL | SqlDialect::SQLite => queries::FIND_MYSQL,
        };

        match sqlx::query(query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?
        {
            Some(row) => Ok(Some(Self::parse_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn put(&self, record: &AccountRecord) -> Result<(), EngineError> {
        let query = match self.dialect {
            SqlDialect::PostgreSQL => queries::UPSERT_PG,
            SqlDialect::MySQL => queries::UPSERT_MYSQL,
            SqlDialect::SQLite => queries::UPSERT_SQLITE,
        };

        sqlx::query(query)
            .bind(&record.username)
            .bind(&record.password_digest)
            .bind(record.created_at)
            .bind(record.trial_days)
            .bind(record.expires_at)
            .bind(record.bound_device.as_deref())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, username: &str) -> Result<bool, EngineError> {
        let query = match self.dialect {
            SqlDialect::PostgreSQL => queries::DELETE_PG,
            SqlDialect::MySQL | SqlDialect::SQLite => queries::DELETE_MYSQL,
        };

        let result = sqlx::query(query)
            .bind(username)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<AccountRecord>, EngineError> {
        let rows = sqlx::query(queries::LIST_ALL).fetch_all(&self.pool).await?;
        rows.iter().map(Self::parse_row).collect()
    }
}

// Debug implementation (don't leak the connection URL)
impl std::fmt::Debug for SqlStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlStore")
            .field("dialect", &self.dialect)
            .finish_non_exhaustive()
    }
}
