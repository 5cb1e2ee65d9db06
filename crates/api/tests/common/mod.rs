#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use racebook_api::config::ServerConfig;
use racebook_api::router::build_app_router;
use racebook_api::state::AppState;

/// Build a test `ServerConfig` from the built-in defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    let mut config = ServerConfig::from_lookup(|_| None).expect("defaults are valid");
    config.host = "127.0.0.1".to_string();
    config.port = 0;
    config
}

/// Build the full application router, with every production middleware layer,
/// over the given database pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_test_app_with_config(pool, &test_config())
}

pub fn build_test_app_with_config(pool: SqlitePool, config: &ServerConfig) -> Router {
    build_app_router(AppState { pool }, config).expect("test config is valid")
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<String>) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Insert one race row with explicit values.
pub async fn insert_race(
    pool: &SqlitePool,
    id: i64,
    meeting_id: i64,
    name: &str,
    visible: bool,
    start: &str,
) {
    sqlx::query(
        "INSERT INTO races (id, meeting_id, name, number, visible, advertised_start_time) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(meeting_id)
    .bind(name)
    .bind(id)
    .bind(visible)
    .bind(start)
    .execute(pool)
    .await
    .unwrap();
}

/// Insert one sports event row with explicit values.
pub async fn insert_event(
    pool: &SqlitePool,
    id: i64,
    name: &str,
    category: &str,
    visible: bool,
    start: &str,
) {
    sqlx::query(
        "INSERT INTO events (id, name, category, competition, visible, advertised_start_time) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(name)
    .bind(category)
    .bind("Test Cup")
    .bind(visible)
    .bind(start)
    .execute(pool)
    .await
    .unwrap();
}
