//! Shared application state for all routes.

use sqlx::SqlitePool;

/// The only state handlers share: the connection pool. Each handler checks
/// out one connection for the duration of its body and the pool takes it
/// back when the guard drops, on success or failure alike.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}
