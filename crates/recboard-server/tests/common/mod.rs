#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;
use tower::ServiceExt;

use recboard_server::config::BoardConfig;
use recboard_server::state::AppState;
use recboard_storage::memory::MemoryStore;
use recboard_storage::repository::RecommendationRepository;

pub struct TestServer {
    pub router: Router,
    pub store: Arc<MemoryStore>,
}

pub fn config(pairs: &[(&str, &str)]) -> BoardConfig {
    let mut env: HashMap<String, String> = HashMap::new();
    env.insert("BOARD_STORE".to_string(), "memory".to_string());
    for (k, v) in pairs {
        env.insert(k.to_string(), v.to_string());
    }
    BoardConfig::from_lookup(|key| env.get(key).cloned()).expect("valid test config")
}

pub fn server_with(store: MemoryStore, pairs: &[(&str, &str)]) -> TestServer {
    let store = Arc::new(store);
    let repo = RecommendationRepository::new(store.clone());
    let state = AppState::new(repo, config(pairs));
    TestServer {
        router: recboard_server::router(state),
        store,
    }
}

pub fn basic(user: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{user}:{password}")))
}

pub async fn send(router: &Router, req: Request<Body>) -> (StatusCode, axum::http::HeaderMap, String) {
    let resp = router.clone().oneshot(req).await.expect("infallible");
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, headers, String::from_utf8_lossy(&bytes).into_owned())
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, String) {
    let req = Request::get(uri).body(Body::empty()).unwrap();
    let (status, _, body) = send(router, req).await;
    (status, body)
}

pub async fn json_request(router: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, _, text) = send(router, req).await;
    let value = serde_json::from_str(&text).unwrap_or(Value::Null);
    (status, value)
}

pub async fn post_form(router: &Router, uri: &str, body: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let req = Request::post(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, req).await
}

pub async fn list(router: &Router) -> Vec<Value> {
    let (status, body) = get(router, "/api/recommendations").await;
    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_str(&body).expect("json");
    value["recommendations"].as_array().expect("array").clone()
}
