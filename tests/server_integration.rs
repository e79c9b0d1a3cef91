//! HTTP server integration tests
//!
//! Exercises the full router against the in-memory repository and verifies
//! the CRUD contract: status codes, response shapes, and the partial-update
//! semantics.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::sync::Arc;
use student_api::{
    config::Settings, server::create_app, store::InMemoryStudentRepository, types::PingResponse,
};
use tower::ServiceExt;

/// Create test application for integration tests
fn create_test_app() -> axum::Router {
    let settings = Settings::default();
    let repository = Arc::new(InMemoryStudentRepository::new());
    create_app(repository, settings)
}

fn request(method: &str, uri: &str, body: Option<Value>) -> axum::http::Request<axum::body::Body> {
    let builder = axum::http::Request::builder()
        .uri(uri)
        .method(method)
        .header("Content-Type", "application/json");

    match body {
        Some(body) => builder
            .body(axum::body::Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(axum::body::Body::empty()).unwrap(),
    }
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a student and return its response body
async fn create_student(app: &axum::Router, body: Value) -> Value {
    let response = app
        .clone()
        .oneshot(request("POST", "/students", Some(body)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response).await
}

#[tokio::test]
async fn test_ping_endpoint() {
    let app = create_test_app();

    let response = app.oneshot(request("GET", "/ping", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let ping: PingResponse = serde_json::from_slice(&bytes).unwrap();
    assert!(!ping.version.is_empty());
}

#[tokio::test]
async fn test_create_then_get_returns_identical_record() {
    let app = create_test_app();

    let created = create_student(&app, json!({"name": "Ana", "age": 21, "course": "CS"})).await;

    let id = created["id"].as_str().expect("created record carries an id");
    assert_eq!(id.len(), 24);
    assert_eq!(created["name"], "Ana");
    assert_eq!(created["age"], 21);
    assert_eq!(created["course"], "CS");

    let response = app
        .oneshot(request("GET", &format!("/students/{}", id), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, created);
}

#[tokio::test]
async fn test_get_unknown_id_returns_not_found() {
    let app = create_test_app();

    let response = app
        .oneshot(request("GET", "/students/ffffffffffffffffffffffff", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response).await;
    assert_eq!(body["message"], "Student not found");
}

#[tokio::test]
async fn test_get_unparseable_id_returns_not_found() {
    let app = create_test_app();

    let response = app
        .oneshot(request("GET", "/students/not-an-object-id", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_rejects_missing_fields() {
    let app = create_test_app();

    let response = app
        .oneshot(request(
            "POST",
            "/students",
            Some(json!({"name": "Ana", "age": 21})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert!(body["message"].as_str().unwrap().contains("course"));
}

#[tokio::test]
async fn test_create_rejects_empty_name() {
    let app = create_test_app();

    let response = app
        .oneshot(request(
            "POST",
            "/students",
            Some(json!({"name": "  ", "age": 21, "course": "CS"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let app = create_test_app();

    let response = app
        .oneshot(
            axum::http::Request::builder()
                .uri("/students")
                .method("POST")
                .header("Content-Type", "application/json")
                .body(axum::body::Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_partial_update_preserves_unspecified_fields() {
    let app = create_test_app();

    let created = create_student(&app, json!({"name": "Ana", "age": 21, "course": "CS"})).await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(request(
            "PUT",
            &format!("/students/{}", id),
            Some(json!({"age": 22})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated = json_body(response).await;
    assert_eq!(updated["age"], 22);
    assert_eq!(updated["name"], "Ana");
    assert_eq!(updated["course"], "CS");

    // The update is visible on a subsequent read
    let response = app
        .oneshot(request("GET", &format!("/students/{}", id), None))
        .await
        .unwrap();
    assert_eq!(json_body(response).await, updated);
}

#[tokio::test]
async fn test_update_unknown_id_returns_not_found() {
    let app = create_test_app();

    let response = app
        .oneshot(request(
            "PUT",
            "/students/ffffffffffffffffffffffff",
            Some(json!({"age": 22})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response).await;
    assert_eq!(body["message"], "Student not found");
}

#[tokio::test]
async fn test_update_rejects_empty_course() {
    let app = create_test_app();

    let created = create_student(&app, json!({"name": "Ana", "age": 21, "course": "CS"})).await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(request(
            "PUT",
            &format!("/students/{}", id),
            Some(json!({"course": ""})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Record is unchanged after the rejected update
    let response = app
        .oneshot(request("GET", &format!("/students/{}", id), None))
        .await
        .unwrap();
    let body = json_body(response).await;
    assert_eq!(body["course"], "CS");
}

#[tokio::test]
async fn test_empty_update_returns_record_unchanged() {
    let app = create_test_app();

    let created = create_student(&app, json!({"name": "Ana", "age": 21, "course": "CS"})).await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .oneshot(request(
            "PUT",
            &format!("/students/{}", id),
            Some(json!({})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, created);
}

#[tokio::test]
async fn test_delete_returns_record_and_removes_it() {
    let app = create_test_app();

    let created = create_student(&app, json!({"name": "Ana", "age": 21, "course": "CS"})).await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(request("DELETE", &format!("/students/{}", id), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["message"], "Student deleted");
    assert_eq!(body["student"], created);

    // A second delete reports null: the record is gone
    let response = app
        .oneshot(request("DELETE", &format!("/students/{}", id), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body["student"].is_null());
}

#[tokio::test]
async fn test_delete_unknown_id_returns_null_student() {
    let app = create_test_app();

    let response = app
        .oneshot(request("DELETE", "/students/ffffffffffffffffffffffff", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["message"], "Student deleted");
    assert!(body["student"].is_null());
}

#[tokio::test]
async fn test_list_after_creates_and_deletes() {
    let app = create_test_app();

    let mut ids = Vec::new();
    for i in 0..4 {
        let created = create_student(
            &app,
            json!({"name": format!("Student {}", i), "age": 20 + i, "course": "CS"}),
        )
        .await;
        ids.push(created["id"].as_str().unwrap().to_string());
    }

    let response = app
        .clone()
        .oneshot(request("DELETE", &format!("/students/{}", ids[1]), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(request("GET", "/students", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let students = body.as_array().expect("listing returns an array");
    assert_eq!(students.len(), 3);
}

#[tokio::test]
async fn test_unknown_route_returns_not_found() {
    let app = create_test_app();

    let response = app
        .oneshot(request("GET", "/courses", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
