/**
 * Registration Handler
 *
 * This module implements the user registration handler for POST /api/users.
 *
 * # Registration Process
 *
 * 1. Validate name, email and password
 * 2. Reject the request if the email is already registered
 * 3. Hash the password with bcrypt
 * 4. Store the user, with an avatar derived from the email
 * 5. Return a session token
 *
 * The existence check and the insert are not atomic. Two concurrent
 * registrations for one email are settled by the store's unique index, and
 * the loser receives a server error rather than a conflict.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{RegisterRequest, TokenResponse};
use crate::backend::auth::users::{hash_password, User};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::backend::validation::Validator;

/// Minimum accepted password length, in characters
pub const MIN_PASSWORD_LEN: usize = 6;

/// Registration handler
///
/// # Errors
///
/// * `400` with field errors - missing name, malformed email, short password
/// * `400 "User already exists"` - email already registered
/// * `500` - store or hashing failure
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let mut check = Validator::new();
    let name = check.required("name", request.name.as_deref(), "Name is required");
    let email = check.email("email", request.email.as_deref(), "Please include a valid email");
    let password = check.min_length(
        "password",
        request.password.as_deref(),
        MIN_PASSWORD_LEN,
        "Please enter a password with 6 or more characters",
    );
    check.finish()?;

    tracing::info!("Registration request for: {}", email);

    if state.store.find_user_by_email(&email).await?.is_some() {
        tracing::warn!("User already exists: {}", email);
        return Err(ApiError::conflict("User already exists"));
    }

    let password_hash = hash_password(&password, state.config.bcrypt_cost)?;
    let user = User::new(name, email, password_hash);
    state.store.insert_user(&user).await?;

    let token = state.tokens.issue(user.id)?;

    tracing::info!("User registered: {} ({})", user.id, user.email);

    Ok(Json(TokenResponse { token }))
}
