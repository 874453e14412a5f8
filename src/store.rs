//! SQLite pool setup and table DDL bootstrap.

use crate::error::ApiError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Table DDL, applied in order at startup. Neither table declares a
/// uniqueness constraint beyond the primary key; in particular `users.email`
/// is not UNIQUE, so duplicate emails insert cleanly.
const TABLE_DDL: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        email TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT
    )",
];

/// Open the pool for `database_url`, creating the database file first if it
/// does not exist. Call once at startup, before `ensure_tables`.
pub async fn connect_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, ApiError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Create the `users` and `items` tables if absent. Idempotent; safe to run
/// on every startup.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), ApiError> {
    for ddl in TABLE_DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::debug!("ensured users and items tables");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ensure_tables_is_idempotent() {
        let pool = connect_pool("sqlite::memory:", 1).await.expect("pool");
        ensure_tables(&pool).await.expect("first run");
        ensure_tables(&pool).await.expect("second run");

        let names: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' \
             AND name IN ('users', 'items') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .expect("table listing");
        assert_eq!(names, vec![("items".to_string(),), ("users".to_string(),)]);
    }
}
