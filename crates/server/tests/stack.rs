//! Tests for the shared layer stack built by `into_app`.

#![allow(clippy::unwrap_used)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::{Router, routing::get};
use serde_json::{Value, json};
use tower::ServiceExt;

use microservices_server::{into_app, middleware::REQUEST_ID_HEADER};

async fn exploding_handler() -> &'static str {
    panic!("handler exploded");
}

async fn hello() -> &'static str {
    "hello"
}

fn test_app() -> Router {
    let routes = Router::new()
        .route("/boom", get(exploding_handler))
        .route("/hello", get(hello));
    into_app(routes, (), "test-service")
}

async fn send(uri: &str) -> Response {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    test_app().oneshot(req).await.unwrap()
}

async fn body_json(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_panicking_handler_returns_json_500() {
    let resp = send("/boom").await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(resp).await,
        json!({"error": "Internal server error"})
    );
}

#[tokio::test]
async fn test_panicking_handler_still_gets_request_id() {
    let resp = send("/boom").await;
    assert!(resp.headers().contains_key(REQUEST_ID_HEADER));
}

#[tokio::test]
async fn test_server_keeps_serving_after_panic() {
    let app = test_app();

    let req = Request::builder().uri("/boom").body(Body::empty()).unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let req = Request::builder().uri("/hello").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_fallback_is_json_404() {
    let resp = send("/nowhere").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({"error": "Not found"}));
}

#[tokio::test]
async fn test_health_is_added() {
    let resp = send("/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_empty_request_id_is_replaced() {
    let req = Request::builder()
        .uri("/hello")
        .header(REQUEST_ID_HEADER, "")
        .body(Body::empty())
        .unwrap();
    let resp = test_app().oneshot(req).await.unwrap();
    let id = resp.headers()[REQUEST_ID_HEADER].to_str().unwrap();
    assert_eq!(id.len(), 36);
}
