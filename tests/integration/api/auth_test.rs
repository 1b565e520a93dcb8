//! Authentication API integration tests
//!
//! Tests for registration, login, the current-user endpoint and the
//! authentication gate.

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use devconnect::backend::auth::users::avatar_url;
use devconnect::backend::store::Store;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{
    assert_field_errors, assert_msg, register_user, spawn_app, WithToken,
};

#[tokio::test]
async fn test_register_returns_token_for_new_user() {
    let app = spawn_app();

    let response = app
        .server
        .post("/api/users")
        .json(&json!({ "name": "Ada", "email": "ada@example.com", "password": "secret1" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let token = response.json::<Value>()["token"].as_str().unwrap().to_string();

    let stored = app.store.find_user_by_email("ada@example.com").await.unwrap().unwrap();
    assert_eq!(app.tokens.verify(&token).unwrap(), stored.id);
    assert_eq!(stored.name, "Ada");
    assert_eq!(stored.avatar, avatar_url("ada@example.com"));
}

#[tokio::test]
async fn test_register_hashes_password() {
    let app = spawn_app();
    register_user(&app.server, "Ada", "ada@example.com", "secret1").await;

    let stored = app.store.find_user_by_email("ada@example.com").await.unwrap().unwrap();
    assert_ne!(stored.password_hash, "secret1");
    assert!(stored.password_hash.starts_with("$2"));
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = spawn_app();
    register_user(&app.server, "Ada", "ada@example.com", "secret1").await;

    let response = app
        .server
        .post("/api/users")
        .json(&json!({ "name": "Impostor", "email": "ada@example.com", "password": "other-pass" }))
        .await;
    assert_msg(&response, StatusCode::BAD_REQUEST, "User already exists");

    // The original record is untouched
    let stored = app.store.find_user_by_email("ada@example.com").await.unwrap().unwrap();
    assert_eq!(stored.name, "Ada");
    let login = app
        .server
        .post("/api/auth")
        .json(&json!({ "email": "ada@example.com", "password": "other-pass" }))
        .await;
    assert_msg(&login, StatusCode::BAD_REQUEST, "Invalid credentials");
}

#[tokio::test]
async fn test_register_validation_lists_every_field() {
    let app = spawn_app();

    let response = app.server.post("/api/users").json(&json!({})).await;

    assert_field_errors(
        &response,
        &[
            ("name", "Name is required"),
            ("email", "Please include a valid email"),
            ("password", "Please enter a password with 6 or more characters"),
        ],
    );
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let app = spawn_app();

    let response = app
        .server
        .post("/api/users")
        .json(&json!({ "name": "Ada", "email": "ada@example.com", "password": "12345" }))
        .await;

    assert_field_errors(
        &response,
        &[("password", "Please enter a password with 6 or more characters")],
    );
    assert!(app.store.find_user_by_email("ada@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_login_success() {
    let app = spawn_app();
    let user = register_user(&app.server, "Ada", "ada@example.com", "secret1").await;

    let response = app
        .server
        .post("/api/auth")
        .json(&json!({ "email": "ada@example.com", "password": "secret1" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let token = response.json::<Value>()["token"].as_str().unwrap().to_string();
    assert_eq!(app.tokens.verify(&token).unwrap(), user.id);
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_email_look_alike() {
    let app = spawn_app();
    register_user(&app.server, "Ada", "ada@example.com", "secret1").await;

    let wrong_password = app
        .server
        .post("/api/auth")
        .json(&json!({ "email": "ada@example.com", "password": "secret2" }))
        .await;
    assert_msg(&wrong_password, StatusCode::BAD_REQUEST, "Invalid credentials");

    let unknown = app
        .server
        .post("/api/auth")
        .json(&json!({ "email": "nobody@example.com", "password": "secret1" }))
        .await;
    assert_msg(&unknown, StatusCode::BAD_REQUEST, "Invalid credentials");
}

#[tokio::test]
async fn test_login_validation() {
    let app = spawn_app();

    let response = app
        .server
        .post("/api/auth")
        .json(&json!({ "email": "not-an-email", "password": "" }))
        .await;

    assert_field_errors(
        &response,
        &[
            ("email", "Enter a valid email address"),
            ("password", "Password is required"),
        ],
    );
}

#[tokio::test]
async fn test_current_user_hides_password_hash() {
    let app = spawn_app();
    let user = register_user(&app.server, "Ada", "ada@example.com", "secret1").await;

    let response = app.server.get("/api/auth").with_token(&user.token).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["id"], user.id.to_string());
    assert_eq!(body["name"], "Ada");
    assert_eq!(body["email"], "ada@example.com");
    assert!(body.get("password_hash").is_none());
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_gate_rejects_missing_token() {
    let app = spawn_app();

    let response = app.server.get("/api/auth").await;

    assert_msg(&response, StatusCode::UNAUTHORIZED, "No token, authorization denied");
}

#[tokio::test]
async fn test_gate_treats_empty_token_as_missing() {
    let app = spawn_app();

    let empty = app.server.get("/api/auth").with_token("").await;
    assert_msg(&empty, StatusCode::UNAUTHORIZED, "No token, authorization denied");

    let blank = app.server.get("/api/posts").with_token("   ").await;
    assert_msg(&blank, StatusCode::UNAUTHORIZED, "No token, authorization denied");
}

#[tokio::test]
async fn test_gate_rejects_bad_tokens() {
    let app = spawn_app();
    let user = register_user(&app.server, "Ada", "ada@example.com", "secret1").await;

    let garbage = app.server.get("/api/auth").with_token("not.a.token").await;
    assert_msg(&garbage, StatusCode::UNAUTHORIZED, "Token not verified, authorization denied");

    let tampered = format!("{}x", user.token);
    let response = app.server.get("/api/auth").with_token(&tampered).await;
    assert_msg(&response, StatusCode::UNAUTHORIZED, "Token not verified, authorization denied");

    let expired = app
        .tokens
        .issue_at(user.id, Utc::now() - Duration::hours(11))
        .unwrap();
    let response = app.server.get("/api/auth").with_token(&expired).await;
    assert_msg(&response, StatusCode::UNAUTHORIZED, "Token not verified, authorization denied");
}

#[tokio::test]
async fn test_gate_runs_before_body_validation() {
    let app = spawn_app();

    let response = app.server.post("/api/posts").json(&json!({})).await;

    assert_msg(&response, StatusCode::UNAUTHORIZED, "No token, authorization denied");
}

#[tokio::test]
async fn test_valid_token_for_deleted_account() {
    let app = spawn_app();
    let ghost = app.tokens.issue(Uuid::new_v4()).unwrap();

    let response = app.server.get("/api/auth").with_token(&ghost).await;

    assert_msg(&response, StatusCode::NOT_FOUND, "User not found");
}

#[tokio::test]
async fn test_health_and_fallback() {
    let app = spawn_app();

    let health = app.server.get("/health").await;
    assert_eq!(health.status_code(), StatusCode::OK);
    assert_eq!(health.json::<Value>()["status"], "ok");

    let missing = app.server.get("/api/nothing-here").await;
    assert_msg(&missing, StatusCode::NOT_FOUND, "Not found");
}
