#![allow(dead_code)]

use std::sync::Arc;

use api::{observability::Observability, state::AppState};
use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use serde_json::Value;
use shared::InMemoryItemStore;
use tower::Service;

/// Router over a store seeded with itemA (id 1) and itemB (id 2)
pub async fn seeded_app() -> (Router, Arc<InMemoryItemStore>) {
    let store = Arc::new(InMemoryItemStore::with_seed_data().await);
    let state = AppState::new(store.clone(), Observability::registry().unwrap());
    (api::app(state), store)
}

pub async fn call(app: &Router, request: Request<Body>) -> Response<Body> {
    let mut svc = app.clone();
    svc.call(request).await.unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
