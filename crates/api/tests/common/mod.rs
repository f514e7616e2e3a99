//! Common test utilities for integration tests.
//!
//! Most tests drive the real router against the in-memory storage backend, so
//! no database is required. The Postgres helpers connect to
//! `TEST_DATABASE_URL` and are skipped when it is unset.

// Not every test binary uses every helper.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use connecthub_api::{
    app::{create_app, Storage},
    config::{
        Config, DatabaseConfig, LoggingConfig, SecurityConfig, ServerConfig, StorageBackend,
    },
};
use fake::{
    faker::{internet::en::SafeEmail, lorem::en::Sentence, name::en::Name},
    Fake,
};
use persistence::memory::InMemoryStore;
use serde_json::{json, Value};
use sqlx::PgPool;
use std::sync::Arc;
use tower::ServiceExt;

/// Test configuration using the in-memory backend.
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            request_timeout_secs: 30,
        },
        database: DatabaseConfig {
            backend: StorageBackend::Memory,
            url: String::new(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout_secs: 10,
            idle_timeout_secs: 600,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        security: SecurityConfig::default(),
    }
}

/// Create a test application router over a fresh in-memory store.
pub fn create_test_app() -> Router {
    create_app(test_config(), Storage::Memory(Arc::new(InMemoryStore::new())))
}

/// Test configuration for the Postgres backend.
pub fn postgres_test_config(url: &str) -> Config {
    let mut config = test_config();
    config.database.backend = StorageBackend::Postgres;
    config.database.url = url.to_string();
    config
}

/// Connect to the test database named by `TEST_DATABASE_URL` and apply the
/// migrations. Returns `None` when the variable is unset.
pub async fn create_test_pool() -> Option<PgPool> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let config = postgres_test_config(&url);

    let pool = persistence::db::create_pool(&config.database.pool_config())
        .await
        .expect("Failed to connect to test database");
    run_migrations(&pool).await;
    Some(pool)
}

/// Run migrations on the test database.
pub async fn run_migrations(pool: &PgPool) {
    sqlx::migrate!("../persistence/src/migrations")
        .run(pool)
        .await
        .expect("Failed to run migrations");
}

/// Remove all rows and reset identities.
pub async fn cleanup_all_test_data(pool: &PgPool) {
    sqlx::query("TRUNCATE events, groups, users RESTART IDENTITY")
        .execute(pool)
        .await
        .expect("Failed to clean test data");
}

/// Create a test application router over the given Postgres pool.
pub fn create_postgres_test_app(pool: PgPool) -> Router {
    let url = std::env::var("TEST_DATABASE_URL").unwrap_or_default();
    create_app(postgres_test_config(&url), Storage::Postgres(pool))
}

/// Build a JSON request.
pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// Build a GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Helper to parse JSON response body.
pub async fn parse_response_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(Value::Null)
}

/// Send a request and return status plus parsed JSON body.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, parse_response_body(response).await)
}

/// Random user payload.
pub fn fake_user() -> Value {
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();
    json!({ "name": name, "email": email })
}

/// Random group payload.
pub fn fake_group() -> Value {
    let name: String = Name().fake();
    let description: String = Sentence(3..8).fake();
    json!({ "name": name, "description": description })
}

/// Create a group via the API and return its id.
pub async fn create_test_group(app: &Router, body: Value) -> i64 {
    let (status, json) = send(app, json_request(Method::POST, "/groups", body)).await;
    assert_eq!(status, StatusCode::OK);
    json["id"].as_i64().expect("group id")
}

/// List a collection endpoint and return its items.
pub async fn list(app: &Router, uri: &str) -> Vec<Value> {
    let (status, json) = send(app, get_request(uri)).await;
    assert_eq!(status, StatusCode::OK);
    json.as_array().cloned().expect("array body")
}
