use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::{path::PathBuf, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.schema_error")]
    SchemaError,
    #[error("database.seed_error")]
    SeedError,
}

/// Configuration for the SQLite database file
pub struct DatabaseConfig {
    pub path: PathBuf,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

/// Opens (or creates) the database file with foreign-key enforcement on
/// every connection. The containing directory is created if missing.
pub async fn create_sqlite_pool(config: &DatabaseConfig) -> Result<SqlitePool, DatabaseError> {
    if let Some(dir) = config.path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir).map_err(|_| DatabaseError::ConnectionError)?;
    }

    let options = SqliteConnectOptions::new()
        .filename(&config.path)
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(options)
        .await
        .map_err(|_| DatabaseError::ConnectionError)?;

    Ok(pool)
}

/// Brings the database to a servable state: pool opened, tables created,
/// reference data seeded. Every step is idempotent, so this is safe to run
/// on every process start; any failure is fatal to startup.
pub async fn initialize(config: &DatabaseConfig) -> Result<SqlitePool, DatabaseError> {
    let pool = create_sqlite_pool(config).await?;
    crate::schema::create_tables(&pool).await?;
    crate::seed::seed_defaults(&pool).await?;
    Ok(pool)
}
