//! Current-user resolution. Unfinished scaffolding: no route registers it.

use crate::crud;
use crate::error::ApiError;
use crate::models::User;
use sqlx::SqliteConnection;

/// Resolve the calling user from an email value, failing with 401
/// `"Invalid credentials"` when no such user exists.
///
/// Nothing supplies or verifies the email yet: there is no token decoding
/// and no password check, and no handler depends on this function. The
/// `secret_key` and `access_token_expire_minutes` settings sit equally
/// unused.
pub async fn current_user(
    conn: &mut SqliteConnection,
    email: Option<&str>,
) -> Result<User, ApiError> {
    let user = match email {
        Some(email) => crud::user::get_by_email(conn, email).await?,
        None => None,
    };
    user.ok_or(ApiError::Unauthorized("Invalid credentials"))
}
