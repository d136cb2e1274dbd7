//! Router-level test helpers

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use super::server::{build_router, AppState};
use crate::config::EnvPresence;
use crate::seed;
use crate::store::{MemoryStore, Store};

/// Router over a freshly seeded in-memory store, plus a handle to that store
pub(crate) async fn memory_app() -> (Router, Store) {
    let store = Store::new(MemoryStore::new());
    seed::run(&store).await;
    let env = EnvPresence {
        database_url: true,
        database_name: true,
    };
    (build_router(AppState::new(store.clone(), env), true), store)
}

/// Router over the given store with no database variables in the environment
pub(crate) fn app_with(store: Store) -> Router {
    build_router(AppState::new(store, EnvPresence::default()), true)
}

pub(crate) async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub(crate) async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub(crate) async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    send(app, request).await
}
