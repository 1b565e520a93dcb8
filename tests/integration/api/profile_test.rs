//! Profile API integration tests
//!
//! Tests for profile upsert, lookups, experience and education entries,
//! and account deletion.

use axum::http::StatusCode;
use devconnect::backend::store::Store;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{
    assert_field_errors, assert_msg, register_unique_user, spawn_app, TestApp, TestUser,
    WithToken,
};

async fn create_profile(app: &TestApp, user: &TestUser) -> Value {
    let response = app
        .server
        .post("/api/profile")
        .with_token(&user.token)
        .json(&json!({
            "status": "Developer",
            "skills": "Rust, SQL ,  HTTP",
            "company": "Acme",
            "twitter": "https://twitter.com/dev"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK, "body: {}", response.text());
    response.json::<Value>()
}

#[tokio::test]
async fn test_own_profile_missing() {
    let app = spawn_app();
    let user = register_unique_user(&app.server, "Ada").await;

    let response = app.server.get("/api/profile/me").with_token(&user.token).await;

    assert_msg(&response, StatusCode::NOT_FOUND, "There is no profile for this user");
}

#[tokio::test]
async fn test_upsert_requires_status_and_skills() {
    let app = spawn_app();
    let user = register_unique_user(&app.server, "Ada").await;

    let response = app
        .server
        .post("/api/profile")
        .with_token(&user.token)
        .json(&json!({ "company": "Acme" }))
        .await;

    assert_field_errors(
        &response,
        &[("status", "Status is required"), ("skills", "Skills is required")],
    );
    assert!(app.store.find_profile_by_user(user.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_profile() {
    let app = spawn_app();
    let user = register_unique_user(&app.server, "Ada").await;

    let profile = create_profile(&app, &user).await;

    assert_eq!(profile["user"], user.id.to_string());
    assert_eq!(profile["status"], "Developer");
    assert_eq!(profile["skills"], json!(["Rust", "SQL", "HTTP"]));
    assert_eq!(profile["company"], "Acme");
    assert_eq!(profile["social"]["twitter"], "https://twitter.com/dev");
    assert_eq!(profile["experience"], json!([]));
}

#[tokio::test]
async fn test_update_only_changes_supplied_fields() {
    let app = spawn_app();
    let user = register_unique_user(&app.server, "Ada").await;
    let created = create_profile(&app, &user).await;

    let response = app
        .server
        .post("/api/profile")
        .with_token(&user.token)
        .json(&json!({
            "status": "Senior Developer",
            "skills": "Rust",
            "bio": "Systems person",
            "youtube": "https://youtube.com/dev"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let updated = response.json::<Value>();
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["status"], "Senior Developer");
    assert_eq!(updated["skills"], json!(["Rust"]));
    assert_eq!(updated["bio"], "Systems person");
    assert_eq!(updated["company"], "Acme");
    assert_eq!(updated["social"]["twitter"], "https://twitter.com/dev");
    assert_eq!(updated["social"]["youtube"], "https://youtube.com/dev");
}

#[tokio::test]
async fn test_read_endpoints_populate_owner() {
    let app = spawn_app();
    let ada = register_unique_user(&app.server, "Ada").await;
    let grace = register_unique_user(&app.server, "Grace").await;
    create_profile(&app, &ada).await;
    create_profile(&app, &grace).await;

    let own = app.server.get("/api/profile/me").with_token(&ada.token).await;
    assert_eq!(own.status_code(), StatusCode::OK);
    let own = own.json::<Value>();
    assert_eq!(own["user"]["id"], ada.id.to_string());
    assert_eq!(own["user"]["name"], "Ada");
    assert!(own["user"]["avatar"].as_str().unwrap().starts_with("//www.gravatar.com/avatar/"));

    let all = app.server.get("/api/profile").await;
    assert_eq!(all.status_code(), StatusCode::OK);
    let names: Vec<String> = all
        .json::<Vec<Value>>()
        .iter()
        .map(|p| p["user"]["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"Ada".to_string()));
    assert!(names.contains(&"Grace".to_string()));

    let by_user = app.server.get(&format!("/api/profile/user/{}", grace.id)).await;
    assert_eq!(by_user.status_code(), StatusCode::OK);
    assert_eq!(by_user.json::<Value>()["user"]["name"], "Grace");
}

#[tokio::test]
async fn test_profile_by_user_not_found() {
    let app = spawn_app();

    let unknown = app.server.get(&format!("/api/profile/user/{}", Uuid::new_v4())).await;
    assert_msg(&unknown, StatusCode::NOT_FOUND, "Profile not found");

    let malformed = app.server.get("/api/profile/user/5d6ede6a0ba62570afcedd3a").await;
    assert_msg(&malformed, StatusCode::NOT_FOUND, "Profile not found");
}

#[tokio::test]
async fn test_add_experience_requires_profile() {
    let app = spawn_app();
    let user = register_unique_user(&app.server, "Ada").await;

    let response = app
        .server
        .put("/api/profile/experience")
        .with_token(&user.token)
        .json(&json!({ "title": "Engineer", "company": "Acme", "from": "2020-01-01" }))
        .await;

    assert_msg(&response, StatusCode::NOT_FOUND, "There is no profile for this user");
}

#[tokio::test]
async fn test_add_experience_validation() {
    let app = spawn_app();
    let user = register_unique_user(&app.server, "Ada").await;
    create_profile(&app, &user).await;

    let response = app
        .server
        .put("/api/profile/experience")
        .with_token(&user.token)
        .json(&json!({ "from": "01/01/2020" }))
        .await;

    assert_field_errors(
        &response,
        &[
            ("title", "Title is required"),
            ("company", "Company is required"),
            ("from", "From date is required"),
        ],
    );
}

#[tokio::test]
async fn test_experience_add_and_remove() {
    let app = spawn_app();
    let user = register_unique_user(&app.server, "Ada").await;
    create_profile(&app, &user).await;

    for (title, from, current) in [("Junior", "2018-06-01", false), ("Senior", "2021-02-15", true)] {
        let response = app
            .server
            .put("/api/profile/experience")
            .with_token(&user.token)
            .json(&json!({ "title": title, "company": "Acme", "from": from, "current": current }))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK, "body: {}", response.text());
    }

    let profile = app.store.find_profile_by_user(user.id).await.unwrap().unwrap();
    let titles: Vec<&str> = profile.experience.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Senior", "Junior"]);
    assert!(profile.experience[0].current);

    let junior_id = profile.experience[1].id;
    let response = app
        .server
        .delete(&format!("/api/profile/experience/{}", junior_id))
        .with_token(&user.token)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let remaining = response.json::<Value>();
    let remaining = remaining["experience"].as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["title"], "Senior");
    assert_eq!(remaining[0]["from"], "2021-02-15");

    let again = app
        .server
        .delete(&format!("/api/profile/experience/{}", junior_id))
        .with_token(&user.token)
        .await;
    assert_msg(&again, StatusCode::NOT_FOUND, "Experience not found");
}

#[tokio::test]
async fn test_education_add_and_remove() {
    let app = spawn_app();
    let user = register_unique_user(&app.server, "Ada").await;
    create_profile(&app, &user).await;

    let invalid = app
        .server
        .put("/api/profile/education")
        .with_token(&user.token)
        .json(&json!({ "school": "MIT" }))
        .await;
    assert_field_errors(
        &invalid,
        &[
            ("degree", "Degree is required"),
            ("fieldofstudy", "Field of study is required"),
            ("from", "From date is required"),
        ],
    );

    let added = app
        .server
        .put("/api/profile/education")
        .with_token(&user.token)
        .json(&json!({
            "school": "MIT",
            "degree": "BSc",
            "fieldofstudy": "Computer Science",
            "from": "2014-09-01",
            "to": "2018-06-30"
        }))
        .await;
    assert_eq!(added.status_code(), StatusCode::OK);
    let added = added.json::<Value>();
    assert_eq!(added["education"][0]["school"], "MIT");
    assert_eq!(added["education"][0]["to"], "2018-06-30");
    let edu_id = added["education"][0]["id"].as_str().unwrap().to_string();

    let removed = app
        .server
        .delete(&format!("/api/profile/education/{}", edu_id))
        .with_token(&user.token)
        .await;
    assert_eq!(removed.status_code(), StatusCode::OK);
    assert_eq!(removed.json::<Value>()["education"], json!([]));

    let malformed = app
        .server
        .delete("/api/profile/education/not-an-id")
        .with_token(&user.token)
        .await;
    assert_msg(&malformed, StatusCode::NOT_FOUND, "Education not found");
}

#[tokio::test]
async fn test_delete_account_keeps_posts() {
    let app = spawn_app();
    let user = register_unique_user(&app.server, "Ada").await;
    create_profile(&app, &user).await;
    let post = app
        .server
        .post("/api/posts")
        .with_token(&user.token)
        .json(&json!({ "text": "still here" }))
        .await
        .json::<Value>();

    let response = app.server.delete("/api/profile").with_token(&user.token).await;
    assert_msg(&response, StatusCode::OK, "User deleted");

    assert!(app.store.find_profile_by_user(user.id).await.unwrap().is_none());
    assert!(app.store.find_user_by_id(user.id).await.unwrap().is_none());

    let post_id: Uuid = post["id"].as_str().unwrap().parse().unwrap();
    assert!(app.store.find_post(post_id).await.unwrap().is_some());

    let login = app
        .server
        .post("/api/auth")
        .json(&json!({ "email": user.email, "password": user.password }))
        .await;
    assert_msg(&login, StatusCode::BAD_REQUEST, "Invalid credentials");
}

#[tokio::test]
async fn test_upsert_after_account_deleted() {
    let app = spawn_app();
    let user = register_unique_user(&app.server, "Ada").await;

    let deleted = app.server.delete("/api/profile").with_token(&user.token).await;
    assert_msg(&deleted, StatusCode::OK, "User deleted");

    let response = app
        .server
        .post("/api/profile")
        .with_token(&user.token)
        .json(&json!({ "status": "Developer", "skills": "Rust" }))
        .await;
    assert_msg(&response, StatusCode::NOT_FOUND, "User not found");

    assert!(app.store.find_profile_by_user(user.id).await.unwrap().is_none());
    let listed = app.server.get("/api/profile").await.json::<Vec<Value>>();
    assert_eq!(listed, Vec::<Value>::new());
}
