use persistence::db::{DatabaseConfig, initialize};
use sqlx::SqlitePool;
use std::env;

/// Initialize the database: open the pool, create tables, seed defaults.
///
/// Environment variables:
/// - DATABASE_PATH: Path to the SQLite file (default: "data/grocery.sqlite")
///
/// # Errors
/// Returns error if the file cannot be opened or schema/seed fails. A seed
/// failure is fatal on purpose; the catalog endpoints assume seeded rows.
pub async fn init_database() -> anyhow::Result<SqlitePool> {
    let path = env::var("DATABASE_PATH").unwrap_or_else(|_| "data/grocery.sqlite".to_string());
    let pool = initialize(&DatabaseConfig::new(path)).await?;
    Ok(pool)
}
