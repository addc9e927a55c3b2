//! Tests for the POST /validate endpoint.

use axum::{body::Body, http::{Request, StatusCode}};
use serde_json::json;

#[path = "../common/mod.rs"]
mod common;
use common::*;

#[tokio::test]
async fn test_activate_validate_status_scenario() {
    let state = create_local_app_state();

    let (_, json) =
        send(&state, post_json("/activate", json!({"key": "ABC", "deviceId": "dev1"}))).await;
    assert_eq!(json, json!({"success": true}));

    let (status, json) =
        send(&state, post_json("/validate", json!({"key": "ABC", "deviceId": "dev1"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"valid": true}));

    let (_, json) =
        send(&state, post_json("/validate", json!({"key": "ABC", "deviceId": "dev2"}))).await;
    assert_eq!(json, json!({"valid": false}));

    let (_, json) = send(&state, get("/status/dev1")).await;
    assert_eq!(json, json!({"licensed": true}));
}

#[tokio::test]
async fn test_validate_after_reactivation_only_latest_device_is_valid() {
    let state = create_local_app_state();
    create_test_binding(&state, "ABC", "dev1");
    create_test_binding(&state, "ABC", "dev2");

    let (_, old) =
        send(&state, post_json("/validate", json!({"key": "ABC", "deviceId": "dev1"}))).await;
    let (_, new) =
        send(&state, post_json("/validate", json!({"key": "ABC", "deviceId": "dev2"}))).await;

    assert_eq!(old["valid"], false);
    assert_eq!(new["valid"], true);
}

#[tokio::test]
async fn test_validate_unknown_key_returns_invalid() {
    let state = create_local_app_state();
    create_test_binding(&state, "ABC", "dev1");

    let (status, json) =
        send(&state, post_json("/validate", json!({"key": "NOPE", "deviceId": "dev1"}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["valid"], false);
}

#[tokio::test]
async fn test_validate_missing_device_returns_invalid() {
    let state = create_local_app_state();
    create_test_binding(&state, "ABC", "dev1");

    let (status, json) = send(&state, post_json("/validate", json!({"key": "ABC"}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["valid"], false);
}

#[tokio::test]
async fn test_validate_does_not_write() {
    let state = create_local_app_state();

    send(&state, post_json("/validate", json!({"key": "ABC", "deviceId": "dev1"}))).await;

    let conn = state.db.get().unwrap();
    assert_eq!(queries::count_bindings(&conn).unwrap(), 0);
}

#[tokio::test]
async fn test_validate_without_body_returns_invalid() {
    let state = create_local_app_state();
    create_test_binding(&state, "ABC", "dev1");

    let request = Request::builder()
        .method("POST")
        .uri("/validate")
        .header("content-type", "application/json")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(&state, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"valid": false}));
}

#[tokio::test]
async fn test_validate_with_invalid_json_returns_400() {
    let state = create_local_app_state();

    let request = Request::builder()
        .method("POST")
        .uri("/validate")
        .header("content-type", "application/json")
        .body(Body::from("{\"key\": "))
        .unwrap();
    let (status, json) = send(&state, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid request body");
}
