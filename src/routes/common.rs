//! Root route: static welcome message, independent of any state.

use axum::{routing::get, Json, Router};

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to the FastAPI application!"
    }))
}

/// GET / — fixed welcome body. Mounted outside the versioned prefix.
pub fn root_routes() -> Router {
    Router::new().route("/", get(root))
}
