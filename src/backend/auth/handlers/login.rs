/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Return a session token
 *
 * # Security
 *
 * - Unknown email and wrong password produce the same response
 * - Passwords are never logged or returned
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::auth::users::verify_password;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::backend::validation::Validator;

/// Login handler
///
/// # Errors
///
/// * `400` with field errors - malformed email or empty password
/// * `400 "Invalid credentials"` - unknown email or wrong password
/// * `500` - store or hashing failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let mut check = Validator::new();
    let email = check.email("email", request.email.as_deref(), "Enter a valid email address");
    let password = check.required("password", request.password.as_deref(), "Password is required");
    check.finish()?;

    tracing::info!("Login request for: {}", email);

    let user = state.store.find_user_by_email(&email).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", email);
        ApiError::InvalidCredentials
    })?;

    if !verify_password(&password, &user.password_hash)? {
        tracing::warn!("Invalid password for user: {}", email);
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.tokens.issue(user.id)?;

    tracing::info!("User logged in: {} ({})", user.id, user.email);

    Ok(Json(TokenResponse { token }))
}
