/**
 * API Route Handlers
 *
 * This module registers every `/api` endpoint on the router.
 *
 * # Routes
 *
 * ## Users and authentication
 * - `POST /api/users` - Register
 * - `POST /api/auth` - Login
 * - `GET /api/auth` - Current user (private)
 *
 * ## Profiles
 * - `GET /api/profile/me` - Own profile (private)
 * - `GET /api/profile` - All profiles
 * - `POST /api/profile` - Create or update own profile (private)
 * - `DELETE /api/profile` - Delete own profile and account (private)
 * - `GET /api/profile/user/{user_id}` - Profile by user id
 * - `PUT /api/profile/experience` - Add experience (private)
 * - `DELETE /api/profile/experience/{exp_id}` - Remove experience (private)
 * - `PUT /api/profile/education` - Add education (private)
 * - `DELETE /api/profile/education/{edu_id}` - Remove education (private)
 *
 * ## Posts (all private)
 * - `POST /api/posts`, `GET /api/posts`
 * - `GET /api/posts/{id}`, `DELETE /api/posts/{id}`
 * - `PUT /api/posts/like/{id}`, `PUT /api/posts/unlike/{id}`
 * - `POST /api/posts/comment/{id}`
 * - `DELETE /api/posts/comment/{id}/{comment_id}`
 *
 * Private handlers take the `AuthUser` extractor; there is no separate
 * route layer.
 */

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::backend::auth::{get_me, login, register};
use crate::backend::posts::handlers::{
    add_comment, create_post, delete_post, get_post, like_post, list_posts, remove_comment,
    unlike_post,
};
use crate::backend::profile::handlers::{
    add_education, add_experience, delete_account, get_own_profile, get_profile_by_user,
    list_profiles, remove_education, remove_experience, upsert_profile,
};
use crate::backend::server::state::AppState;

pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Users and authentication
        .route("/api/users", post(register))
        .route("/api/auth", get(get_me).post(login))
        // Profiles
        .route("/api/profile/me", get(get_own_profile))
        .route(
            "/api/profile",
            get(list_profiles).post(upsert_profile).delete(delete_account),
        )
        .route("/api/profile/user/{user_id}", get(get_profile_by_user))
        .route("/api/profile/experience", put(add_experience))
        .route("/api/profile/experience/{exp_id}", delete(remove_experience))
        .route("/api/profile/education", put(add_education))
        .route("/api/profile/education/{edu_id}", delete(remove_education))
        // Posts
        .route("/api/posts", get(list_posts).post(create_post))
        .route("/api/posts/{id}", get(get_post).delete(delete_post))
        .route("/api/posts/like/{id}", put(like_post))
        .route("/api/posts/unlike/{id}", put(unlike_post))
        .route("/api/posts/comment/{id}", post(add_comment))
        .route("/api/posts/comment/{id}/{comment_id}", delete(remove_comment))
}
