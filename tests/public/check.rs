//! Tests for the GET /check endpoint (remote entitlement source).

use axum::http::StatusCode;

#[path = "../common/mod.rs"]
mod common;
use common::*;

#[tokio::test]
async fn test_check_missing_device_id_returns_400_without_remote_call() {
    let stub = StubEntitlements::new(StubReply::Licensed);
    let state = create_test_app_state(stub.clone());

    let (status, json) = send(&state, get("/check")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Missing deviceId");
    assert!(stub.calls().is_empty(), "remote source must not be queried");
}

#[tokio::test]
async fn test_check_empty_device_id_returns_400() {
    let stub = StubEntitlements::new(StubReply::Licensed);
    let state = create_test_app_state(stub.clone());

    let (status, json) = send(&state, get("/check?deviceId=")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Missing deviceId");
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn test_check_with_matching_record_is_licensed() {
    let stub = StubEntitlements::new(StubReply::Licensed);
    let state = create_test_app_state(stub.clone());

    let (status, json) = send(&state, get("/check?deviceId=dev1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({"licensed": true}));
    assert_eq!(stub.calls(), vec!["dev1".to_string()]);
}

#[tokio::test]
async fn test_check_without_matching_record_is_not_licensed() {
    let stub = StubEntitlements::new(StubReply::NotLicensed);
    let state = create_test_app_state(stub);

    let (status, json) = send(&state, get("/check?deviceId=dev1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["licensed"], false);
}

#[tokio::test]
async fn test_check_ignores_local_bindings() {
    let stub = StubEntitlements::new(StubReply::NotLicensed);
    let state = create_test_app_state(stub);
    create_test_binding(&state, "ABC", "dev1");

    let (_, json) = send(&state, get("/check?deviceId=dev1")).await;

    assert_eq!(
        json["licensed"], false,
        "local activation does not imply a remote entitlement"
    );
}

#[tokio::test]
async fn test_check_remote_failure_hides_details() {
    let stub = StubEntitlements::new(StubReply::Unreachable);
    let state = create_test_app_state(stub);

    let (status, json) = send(&state, get("/check?deviceId=dev1")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Database error");
    assert!(!json.to_string().contains("upstream secret detail"));
}

#[tokio::test]
async fn test_check_remote_timeout_returns_500() {
    let stub = StubEntitlements::new(StubReply::TimedOut);
    let state = create_test_app_state(stub);

    let (status, json) = send(&state, get("/check?deviceId=dev1")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Entitlement lookup timed out");
}

#[tokio::test]
async fn test_check_unexpected_fault_returns_internal_error() {
    let stub = StubEntitlements::new(StubReply::Panic);
    let state = create_test_app_state(stub);

    let (status, json) = send(&state, get("/check?deviceId=dev1")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Internal error");
}
