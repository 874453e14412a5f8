//! Tests for the root welcome route and the configurable API prefix.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use catalog_api::{app, connect_pool, ensure_tables, Settings};
use serde_json::json;
use tower::ServiceExt;

async fn test_app_with(settings: &Settings) -> Router {
    // One connection so every query in the test sees the same in-memory db.
    let pool = connect_pool("sqlite::memory:", 1).await.expect("pool");
    ensure_tables(&pool).await.expect("table bootstrap");
    app(settings, pool)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn root_returns_the_fixed_welcome_message() {
    let app = test_app_with(&Settings::default()).await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Welcome to the FastAPI application!"})
    );
}

#[tokio::test]
async fn welcome_message_ignores_store_state() {
    let app = test_app_with(&Settings::default()).await;

    let create = Request::builder()
        .uri("/api/v1/users/")
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(json!({"email": "a@example.com"}).to_string()))
        .unwrap();
    assert_eq!(app.clone().oneshot(create).await.unwrap().status(), StatusCode::OK);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(
        body_json(response).await,
        json!({"message": "Welcome to the FastAPI application!"})
    );
}

#[tokio::test]
async fn resources_mount_under_the_configured_prefix() {
    let settings = Settings {
        api_prefix: "/api/v2".into(),
        ..Settings::default()
    };
    let app = test_app_with(&settings).await;

    let create = Request::builder()
        .uri("/api/v2/users/")
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(json!({"email": "a@example.com"}).to_string()))
        .unwrap();
    assert_eq!(app.clone().oneshot(create).await.unwrap().status(), StatusCode::OK);

    // The default prefix is not mounted when another one is configured.
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/users/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
