//! Minimal users/items REST backend: axum over a SQLite table store.

pub mod auth;
pub mod config;
pub mod crud;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

use axum::Router;
use sqlx::SqlitePool;

pub use auth::current_user;
pub use config::Settings;
pub use error::ApiError;
pub use state::AppState;
pub use store::{connect_pool, ensure_tables};

/// Build the full application router: the root welcome route plus the users
/// and items resources nested under `settings.api_prefix`.
pub fn app(settings: &Settings, pool: SqlitePool) -> Router {
    let state = AppState { pool };
    let api = Router::new()
        .merge(routes::item_routes(state.clone()))
        .merge(routes::user_routes(state));
    Router::new()
        .merge(routes::root_routes())
        .nest(&settings.api_prefix, api)
}
