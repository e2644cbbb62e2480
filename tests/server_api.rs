//! HTTP API tests, driving the router directly without binding a socket

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use bloom_objectives::server::{router, ServerState};
use serde_json::Value;
use tower::ServiceExt;

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = router(ServerState::new()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/generate")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_generate_success() {
    let (status, body) = send(post_json(
        r#"{"goal": "  Students will design a user interface for a mobile application  "}"#,
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let result = &body["result"];
    assert_eq!(result["goal"], "Students will design a user interface for a mobile application");
    assert_eq!(result["target_level"], 6);
    assert_eq!(result["target_level_name"], "create");
    assert_eq!(
        result["main_objective"],
        "Design a user interface for a mobile application. (create)"
    );
    assert_eq!(result["supporting_objectives"].as_array().unwrap().len(), 5);
    assert!(result["formatted_output"]
        .as_str()
        .unwrap()
        .starts_with("1.0.0. Design"));
}

#[tokio::test]
async fn test_generate_missing_goal() {
    let (status, body) = send(post_json("{}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "No goal provided");
}

#[tokio::test]
async fn test_generate_blank_goal() {
    let (status, body) = send(post_json(r#"{"goal": "   "}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Goal cannot be empty");
}

#[tokio::test]
async fn test_generate_malformed_json() {
    let (status, body) = send(post_json("{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid JSON data");
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_status_reports_version() {
    let (status, body) = send(get("/api/status")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], bloom_objectives::VERSION);
}

#[tokio::test]
async fn test_index_page() {
    let response = router(ServerState::new()).oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("/api/generate"));
}

#[tokio::test]
async fn test_unknown_path() {
    let (status, body) = send(get("/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Endpoint not found");
}
