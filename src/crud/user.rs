//! User rows: single-row insert and primary-key lookup.

use crate::error::ApiError;
use crate::models::{User, UserCreate};
use sqlx::SqliteConnection;

/// Insert one user and return the persisted row, id assigned by the store.
/// No duplicate-email check happens here or anywhere else.
pub async fn create(conn: &mut SqliteConnection, input: &UserCreate) -> Result<User, ApiError> {
    tracing::debug!(email = %input.email, "insert user");
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (email) VALUES (?1) RETURNING id, email",
    )
    .bind(&input.email)
    .fetch_one(&mut *conn)
    .await?;
    Ok(user)
}

/// Fetch one user by id. Absence is `Ok(None)`, never an error; the routing
/// layer decides what a missing user means.
pub async fn get(conn: &mut SqliteConnection, user_id: i64) -> Result<Option<User>, ApiError> {
    tracing::debug!(user_id, "select user by id");
    let user = sqlx::query_as::<_, User>("SELECT id, email FROM users WHERE id = ?1")
        .bind(user_id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(user)
}

/// Fetch one user by email. Only the current-user scaffolding calls this.
pub async fn get_by_email(
    conn: &mut SqliteConnection,
    email: &str,
) -> Result<Option<User>, ApiError> {
    tracing::debug!(email, "select user by email");
    let user = sqlx::query_as::<_, User>("SELECT id, email FROM users WHERE email = ?1")
        .bind(email)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(user)
}
