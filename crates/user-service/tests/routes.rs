//! Router-level tests for the user service.

#![allow(clippy::unwrap_used)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use microservices_core::User;
use serde_json::{Value, json};
use tower::ServiceExt;

use microservices_server::middleware::REQUEST_ID_HEADER;
use microservices_user_service::{app, state::AppState};

async fn get(uri: &str) -> Response {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app(AppState::default()).oneshot(req).await.unwrap()
}

async fn body_bytes(resp: Response) -> Vec<u8> {
    axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(resp: Response) -> Value {
    serde_json::from_slice(&body_bytes(resp).await).unwrap()
}

#[tokio::test]
async fn test_root_returns_status_message() {
    let resp = get("/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({"message": "User Service is running!"})
    );
}

#[tokio::test]
async fn test_users_returns_catalog_in_order() {
    let resp = get("/users").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );
    assert_eq!(
        body_json(resp).await,
        json!([
            {"id": 1, "name": "Alice"},
            {"id": 2, "name": "Bob"},
            {"id": 3, "name": "Charlie"}
        ])
    );
}

#[tokio::test]
async fn test_users_exact_bytes() {
    let body = body_bytes(get("/users").await).await;
    assert_eq!(
        body,
        br#"[{"id":1,"name":"Alice"},{"id":2,"name":"Bob"},{"id":3,"name":"Charlie"}]"#
    );
}

#[tokio::test]
async fn test_repeated_calls_are_identical() {
    let first = body_bytes(get("/users").await).await;
    let second = body_bytes(get("/users").await).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let resp = get("/unknown").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({"error": "Not found"}));
}

#[tokio::test]
async fn test_orders_route_does_not_exist_here() {
    let resp = get("/orders").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_on_known_route() {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/users")
        .body(Body::empty())
        .unwrap();
    let resp = app(AppState::default()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_health() {
    let resp = get("/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, b"ok");
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let resp = get("/").await;
    let id = resp.headers()[REQUEST_ID_HEADER].to_str().unwrap();
    assert_eq!(id.len(), 36);
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let req = Request::builder()
        .uri("/users")
        .header(REQUEST_ID_HEADER, "upstream-123")
        .body(Body::empty())
        .unwrap();
    let resp = app(AppState::default()).oneshot(req).await.unwrap();
    assert_eq!(resp.headers()[REQUEST_ID_HEADER], "upstream-123");
}

#[tokio::test]
async fn test_custom_state_is_served() {
    let state = AppState::new("Staging Users", vec![User::new(7, "Dana")]);
    let app = app(state);

    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(
        body_json(resp).await,
        json!({"message": "Staging Users is running!"})
    );

    let req = Request::builder().uri("/users").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(body_json(resp).await, json!([{"id": 7, "name": "Dana"}]));
}
