/**
 * Post Handlers
 *
 * HTTP handlers for the `/api/posts` endpoints. Every route is private.
 *
 * # Routes
 *
 * - `POST /api/posts` - create a post
 * - `GET /api/posts` - all posts, newest first
 * - `GET /api/posts/{id}` - one post
 * - `DELETE /api/posts/{id}` - delete own post
 * - `PUT /api/posts/like/{id}` - like a post
 * - `PUT /api/posts/unlike/{id}` - remove own like
 * - `POST /api/posts/comment/{id}` - comment on a post
 * - `DELETE /api/posts/comment/{id}/{comment_id}` - delete own comment
 *
 * Like, unlike and comment changes load the post, check, then save it
 * whole. The sequence is not atomic: concurrent requests from the same
 * user on the same post can both pass the check.
 */

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;
use crate::backend::posts::model::{Comment, Post};
use crate::backend::posts::types::TextRequest;
use crate::backend::store::Store;
use crate::backend::validation::{parse_id, Validator};

const NO_POST: &str = "No post found";
const NOT_AUTHORIZED: &str = "User not authorized";

/// Load a post by its path id; malformed and unknown ids are both 404
async fn load_post(store: &dyn Store, raw_id: &str) -> Result<Post, ApiError> {
    let id = parse_id(raw_id, NO_POST)?;
    store.find_post(id).await?.ok_or_else(|| {
        tracing::warn!("Post not found: {}", id);
        ApiError::not_found(NO_POST)
    })
}

/// Load the author record copied onto new posts and comments
async fn load_author(store: &dyn Store, user_id: Uuid) -> Result<User, ApiError> {
    store.find_user_by_id(user_id).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", user_id);
        ApiError::not_found("User not found")
    })
}

fn require_text(request: &TextRequest) -> Result<String, ApiError> {
    let mut check = Validator::new();
    let text = check.required("text", request.text.as_deref(), "Text is required");
    check.finish()?;
    Ok(text)
}

/// POST /api/posts
pub async fn create_post(
    State(store): State<Arc<dyn Store>>,
    AuthUser(auth): AuthUser,
    Json(request): Json<TextRequest>,
) -> Result<Json<Post>, ApiError> {
    let text = require_text(&request)?;
    let author = load_author(store.as_ref(), auth.user_id).await?;

    let post = Post::new(&author, text);
    store.insert_post(&post).await?;

    tracing::info!("Post {} created by user: {}", post.id, auth.user_id);

    Ok(Json(post))
}

/// GET /api/posts
pub async fn list_posts(
    State(store): State<Arc<dyn Store>>,
    AuthUser(_auth): AuthUser,
) -> Result<Json<Vec<Post>>, ApiError> {
    Ok(Json(store.list_posts().await?))
}

/// GET /api/posts/{id}
pub async fn get_post(
    State(store): State<Arc<dyn Store>>,
    AuthUser(_auth): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    Ok(Json(load_post(store.as_ref(), &id).await?))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    State(store): State<Arc<dyn Store>>,
    AuthUser(auth): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let post = load_post(store.as_ref(), &id).await?;

    if !post.is_owned_by(auth.user_id) {
        tracing::warn!("User {} tried to delete post {} they do not own", auth.user_id, post.id);
        return Err(ApiError::forbidden(NOT_AUTHORIZED));
    }

    store.delete_post(post.id).await?;

    tracing::info!("Post {} removed", post.id);

    Ok(Json(json!({ "msg": "Post removed" })))
}

/// PUT /api/posts/like/{id}
pub async fn like_post(
    State(store): State<Arc<dyn Store>>,
    AuthUser(auth): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    let mut post = load_post(store.as_ref(), &id).await?;

    if post.is_liked_by(auth.user_id) {
        tracing::warn!("Post {} already liked by user: {}", post.id, auth.user_id);
        return Err(ApiError::conflict("Post already liked"));
    }

    post.add_like(auth.user_id);
    store.save_post(&post).await?;

    tracing::info!("Post {} liked by user: {}", post.id, auth.user_id);

    Ok(Json(post))
}

/// PUT /api/posts/unlike/{id}
pub async fn unlike_post(
    State(store): State<Arc<dyn Store>>,
    AuthUser(auth): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    let mut post = load_post(store.as_ref(), &id).await?;

    if !post.remove_like(auth.user_id) {
        tracing::warn!("Post {} not liked by user: {}", post.id, auth.user_id);
        return Err(ApiError::conflict("Post not yet liked"));
    }

    store.save_post(&post).await?;

    tracing::info!("Post {} unliked by user: {}", post.id, auth.user_id);

    Ok(Json(post))
}

/// POST /api/posts/comment/{id}
///
/// Returns the post's comments, newest first.
pub async fn add_comment(
    State(store): State<Arc<dyn Store>>,
    AuthUser(auth): AuthUser,
    Path(id): Path<String>,
    Json(request): Json<TextRequest>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    let text = require_text(&request)?;
    let author = load_author(store.as_ref(), auth.user_id).await?;
    let mut post = load_post(store.as_ref(), &id).await?;

    post.add_comment(Comment::new(&author, text));
    store.save_post(&post).await?;

    tracing::info!("Comment added to post {} by user: {}", post.id, auth.user_id);

    Ok(Json(post.comments))
}

/// DELETE /api/posts/comment/{id}/{comment_id}
///
/// The comment is located by its own id; only its author may remove it.
pub async fn remove_comment(
    State(store): State<Arc<dyn Store>>,
    AuthUser(auth): AuthUser,
    Path((id, comment_id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let mut post = load_post(store.as_ref(), &id).await?;

    let comment_id = parse_id(&comment_id, "Comment does not exist")?;
    let comment = post
        .find_comment(comment_id)
        .ok_or_else(|| ApiError::not_found("Comment does not exist"))?;

    if comment.user != auth.user_id {
        tracing::warn!(
            "User {} tried to delete comment {} they do not own",
            auth.user_id,
            comment_id
        );
        return Err(ApiError::forbidden(NOT_AUTHORIZED));
    }

    post.remove_comment(comment_id);
    store.save_post(&post).await?;

    tracing::info!("Comment {} removed from post {}", comment_id, post.id);

    Ok(Json(json!({ "msg": "Comment removed" })))
}
