/**
 * Authentication Middleware
 *
 * This module provides the gate for routes that require user
 * authentication. It reads the session token from the `x-auth-token`
 * header, verifies it with the token service, and hands the user id to
 * handlers.
 *
 * The gate never touches the store: a valid signature on an unexpired
 * token is all it checks.
 */

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use uuid::Uuid;

use crate::backend::auth::sessions::TokenService;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Header carrying the session token on private requests
pub const AUTH_HEADER: &str = "x-auth-token";

/// Authenticated user data extracted from the session token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Check the request headers for a valid session token
///
/// # Errors
///
/// * `Unauthenticated("No token, authorization denied")` - header absent
///   or blank
/// * `Unauthenticated("Token not verified, authorization denied")` - bad
///   signature, malformed or expired token
pub fn authenticate(headers: &HeaderMap, tokens: &TokenService) -> Result<AuthenticatedUser, ApiError> {
    let token = headers
        .get(AUTH_HEADER)
        .map(|value| value.to_str().unwrap_or_default().trim())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Missing {} header", AUTH_HEADER);
            ApiError::unauthenticated("No token, authorization denied")
        })?;

    let user_id = tokens.verify(token).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        ApiError::from(e)
    })?;

    Ok(AuthenticatedUser { user_id })
}

/// Axum extractor for the authenticated user
///
/// Runs the gate on the request and records the identity in the request
/// extensions. Handlers that take `AuthUser` are private; the rejection is
/// the 401 JSON body from `ApiError`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthenticatedUser>() {
            return Ok(AuthUser(user.clone()));
        }

        let user = authenticate(&parts.headers, &state.tokens)?;
        parts.extensions.insert(user.clone());
        Ok(AuthUser(user))
    }
}
