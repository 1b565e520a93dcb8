/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /api/auth, which returns the
 * record of the currently authenticated user. The password hash is never
 * serialized.
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::auth::users::User;
use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;
use crate::backend::store::Store;

/// Get current user handler
///
/// # Errors
///
/// * `401` - missing or invalid token
/// * `404 "User not found"` - the account was deleted after the token was issued
pub async fn get_me(
    State(store): State<Arc<dyn Store>>,
    AuthUser(auth): AuthUser,
) -> Result<Json<User>, ApiError> {
    let user = store.find_user_by_id(auth.user_id).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", auth.user_id);
        ApiError::not_found("User not found")
    })?;

    Ok(Json(user))
}
