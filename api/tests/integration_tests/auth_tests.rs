//! Integration tests for login and token issuance.
//!
//! Tests cover:
//! - The fixed demo credential pair
//! - Token claims round-tripping through verification
//! - Rejection of every other credential combination

use axum::http::StatusCode;
use serde_json::json;

use super::common::{post_json, test_app};

#[tokio::test]
async fn test_login_issues_decodable_token() {
    let (app, state) = test_app();

    let (status, response) = post_json(
        app,
        "/api/auth/login",
        json!({"username": "admin", "password": "admin123"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["username"], "admin");

    let token = response["token"].as_str().unwrap();
    let claims = state.auth_keys().verify(token).unwrap();
    assert_eq!(claims.username, "admin");
    assert_eq!(claims.role, "admin");
}

#[tokio::test]
async fn test_login_rejects_wrong_password() {
    let (app, _state) = test_app();

    let (status, response) = post_json(
        app,
        "/api/auth/login",
        json!({"username": "admin", "password": "wrong"}),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(response["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_rejects_unknown_username() {
    let (app, _state) = test_app();

    let (status, response) = post_json(
        app,
        "/api/auth/login",
        json!({"username": "operator", "password": "admin123"}),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(response["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_rejects_empty_credentials() {
    let (app, _state) = test_app();

    let (status, response) = post_json(
        app,
        "/api/auth/login",
        json!({"username": "", "password": ""}),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(response["error"], "Invalid credentials");
}
