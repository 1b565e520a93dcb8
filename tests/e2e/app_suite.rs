//! E2E test suite for DevConnect
//!
//! Walks a user from registration through posting and liking, then a
//! second user through profile setup and commenting.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{assert_msg, spawn_app, WithToken};

#[tokio::test]
async fn test_register_login_post_and_like() {
    let app = spawn_app();

    let registered = app
        .server
        .post("/api/users")
        .json(&json!({ "name": "A", "email": "a@x.com", "password": "secret1" }))
        .await;
    assert_eq!(registered.status_code(), StatusCode::OK);
    assert!(registered.json::<Value>()["token"].is_string());

    let login = app
        .server
        .post("/api/auth")
        .json(&json!({ "email": "a@x.com", "password": "secret1" }))
        .await;
    assert_eq!(login.status_code(), StatusCode::OK);
    let token = login.json::<Value>()["token"].as_str().unwrap().to_string();
    let user_id = app.tokens.verify(&token).unwrap();

    let created = app
        .server
        .post("/api/posts")
        .with_token(&token)
        .json(&json!({ "text": "hi" }))
        .await;
    assert_eq!(created.status_code(), StatusCode::OK);
    let post = created.json::<Value>();
    assert_eq!(post["text"], "hi");
    assert_eq!(post["likes"], json!([]));
    assert_eq!(post["comments"], json!([]));
    let like_path = format!("/api/posts/like/{}", post["id"].as_str().unwrap());

    let liked = app.server.put(&like_path).with_token(&token).await;
    assert_eq!(liked.status_code(), StatusCode::OK);
    assert_eq!(liked.json::<Value>()["likes"], json!([{ "user": user_id.to_string() }]));

    let repeat = app.server.put(&like_path).with_token(&token).await;
    assert_msg(&repeat, StatusCode::BAD_REQUEST, "Post already liked");
}

#[tokio::test]
async fn test_profile_then_comment_flow() {
    let app = spawn_app();

    let token = app
        .server
        .post("/api/users")
        .json(&json!({ "name": "B", "email": "b@x.com", "password": "secret2" }))
        .await
        .json::<Value>()["token"]
        .as_str()
        .unwrap()
        .to_string();

    let profile = app
        .server
        .post("/api/profile")
        .with_token(&token)
        .json(&json!({ "status": "Student", "skills": "rust" }))
        .await;
    assert_eq!(profile.status_code(), StatusCode::OK);

    let post_id = app
        .server
        .post("/api/posts")
        .with_token(&token)
        .json(&json!({ "text": "first post" }))
        .await
        .json::<Value>()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let comments = app
        .server
        .post(&format!("/api/posts/comment/{}", post_id))
        .with_token(&token)
        .json(&json!({ "text": "replying to myself" }))
        .await
        .json::<Value>();
    let comment_id = comments[0]["id"].as_str().unwrap();

    let removed = app
        .server
        .delete(&format!("/api/posts/comment/{}/{}", post_id, comment_id))
        .with_token(&token)
        .await;
    assert_msg(&removed, StatusCode::OK, "Comment removed");

    let post = app
        .server
        .get(&format!("/api/posts/{}", post_id))
        .with_token(&token)
        .await
        .json::<Value>();
    assert_eq!(post["comments"], json!([]));

    let listed = app.server.get("/api/profile").await.json::<Vec<Value>>();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["user"]["name"], "B");
    assert_eq!(listed[0]["skills"], json!(["rust"]));
}
