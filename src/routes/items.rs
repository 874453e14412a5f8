//! Item routes: create one, fetch one by id.

use crate::crud;
use crate::error::ApiError;
use crate::models::{Item, ItemCreate};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

/// POST /items/ — insert one item, return it with its assigned id.
pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<ItemCreate>,
) -> Result<Json<Item>, ApiError> {
    let mut conn = state.pool.acquire().await?;
    let item = crud::item::create(&mut conn, &payload).await?;
    Ok(Json(item))
}

/// GET /items/:item_id — fetch one item, 404 with a fixed detail on a miss.
pub async fn read_item(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
) -> Result<Json<Item>, ApiError> {
    let mut conn = state.pool.acquire().await?;
    let item = crud::item::get(&mut conn, item_id)
        .await?
        .ok_or(ApiError::NotFound("Item not found"))?;
    Ok(Json(item))
}

pub fn item_routes(state: AppState) -> Router {
    Router::new()
        .route("/items/", post(create_item))
        .route("/items/:item_id", get(read_item))
        .with_state(state)
}
