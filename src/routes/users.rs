//! User routes: create one, fetch one by id.

use crate::crud;
use crate::error::ApiError;
use crate::models::{User, UserCreate};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

/// POST /users/ — insert one user, return it with its assigned id.
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserCreate>,
) -> Result<Json<User>, ApiError> {
    let mut conn = state.pool.acquire().await?;
    let user = crud::user::create(&mut conn, &payload).await?;
    Ok(Json(user))
}

/// GET /users/:user_id — fetch one user, 404 with a fixed detail on a miss.
pub async fn read_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    let mut conn = state.pool.acquire().await?;
    let user = crud::user::get(&mut conn, user_id)
        .await?
        .ok_or(ApiError::NotFound("User not found"))?;
    Ok(Json(user))
}

pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route("/users/", post(create_user))
        .route("/users/:user_id", get(read_user))
        .with_state(state)
}
