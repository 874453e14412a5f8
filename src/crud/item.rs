//! Item rows: single-row insert and primary-key lookup.

use crate::error::ApiError;
use crate::models::{Item, ItemCreate};
use sqlx::SqliteConnection;

/// Insert one item and return the persisted row, id assigned by the store.
pub async fn create(conn: &mut SqliteConnection, input: &ItemCreate) -> Result<Item, ApiError> {
    tracing::debug!(title = %input.title, "insert item");
    let item = sqlx::query_as::<_, Item>(
        "INSERT INTO items (title, description) VALUES (?1, ?2) RETURNING id, title, description",
    )
    .bind(&input.title)
    .bind(&input.description)
    .fetch_one(&mut *conn)
    .await?;
    Ok(item)
}

/// Fetch one item by id. Absence is `Ok(None)`, never an error.
pub async fn get(conn: &mut SqliteConnection, item_id: i64) -> Result<Option<Item>, ApiError> {
    tracing::debug!(item_id, "select item by id");
    let item = sqlx::query_as::<_, Item>("SELECT id, title, description FROM items WHERE id = ?1")
        .bind(item_id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(item)
}
