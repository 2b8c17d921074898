#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, Response, header::CONTENT_TYPE},
};
use cinema_api::{AppState, config::Config, db, routes};
use migration::MigratorTrait;
use serde_json::{Value, json};
use tower::ServiceExt;

pub fn test_config() -> Config {
    Config {
        addr: "127.0.0.1:0".parse().unwrap(),
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
        seed_demo_data: false,
    }
}

/// The production router over a fresh in-memory database.
pub async fn build_test_app() -> Router {
    let config = test_config();
    let conn = db::connect(&config.database_url, config.max_connections).await.unwrap();
    migration::Migrator::up(&conn, None).await.unwrap();
    routes::build_router(Arc::new(AppState::new(Arc::new(config), conn)))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        },
        None => Body::empty(),
    };
    app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn movie_payload(title: &str) -> Value {
    json!({
        "title": title,
        "description": "A new movie description",
        "age_limit": 16,
        "language": "English",
        "cover_art": "https://via.placeholder.com/200x300.png/00aacc?text=movie+poster",
    })
}

/// Creates a movie over HTTP and returns its id.
pub async fn create_movie(app: &Router, title: &str) -> i64 {
    let response = post_json(app, "/movies/create", movie_payload(title)).await;
    assert_eq!(response.status(), 200);
    body_json(response).await["id"].as_i64().unwrap()
}
