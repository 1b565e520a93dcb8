/**
 * API Error Types
 *
 * This module defines the error taxonomy returned by every HTTP handler.
 * Each variant maps to exactly one HTTP status code and one JSON body shape.
 *
 * # Error Categories
 *
 * ## Client errors
 *
 * - `Validation` - one or more request fields failed validation (400)
 * - `Conflict` - duplicate email, duplicate like, missing like (400)
 * - `InvalidCredentials` - unknown email or wrong password (400)
 * - `NotFound` - missing or malformed resource identifier (404)
 *
 * ## Identity errors
 *
 * - `Unauthenticated` - missing, invalid or expired token (401)
 * - `Forbidden` - valid identity but not the resource owner (401)
 *
 * ## Server errors
 *
 * - `Internal` - unexpected store or signing failure (500)
 */

use axum::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::backend::auth::sessions::TokenError;
use crate::backend::store::StoreError;

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Request field that failed validation
    pub param: String,
    /// Human-readable error message
    pub msg: String,
}

impl FieldError {
    pub fn new(param: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            msg: msg.into(),
        }
    }
}

/// Errors returned by API handlers
///
/// # Usage
///
/// ```rust
/// use devconnect::backend::error::ApiError;
///
/// let err = ApiError::not_found("No post found");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Field-level validation failures
    #[error("Validation failed: {0:?}")]
    Validation(Vec<FieldError>),

    /// Missing or unverifiable credentials on a private route
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// Authenticated caller does not own the resource
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Resource is missing or its identifier is malformed
    #[error("Not found: {0}")]
    NotFound(String),

    /// Business-rule conflict detected before any mutation
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Login failed; deliberately does not say which half was wrong
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Unexpected failure; the detail is logged, never returned
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation(errors)
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation`, `Conflict`, `InvalidCredentials` - 400 Bad Request
    /// - `Unauthenticated`, `Forbidden` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Conflict(_) | Self::InvalidCredentials => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthenticated(_) | Self::Forbidden(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing message
    ///
    /// Internal errors collapse to a fixed message so store or signing
    /// details never reach the client.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(errors) => errors
                .iter()
                .map(|e| e.msg.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            Self::Unauthenticated(message)
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::Conflict(message) => message.clone(),
            Self::InvalidCredentials => "Invalid credentials".to_string(),
            Self::Internal(_) => "Server error".to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        tracing::error!("Store operation failed: {}", err);
        Self::Internal(err.to_string())
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing(e) => {
                tracing::error!("Failed to sign token: {:?}", e);
                Self::Internal(format!("Token signing failed: {}", e))
            }
            TokenError::InvalidToken | TokenError::Expired => {
                Self::Unauthenticated("Token not verified, authorization denied".to_string())
            }
        }
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        tracing::error!("Password hashing failed: {:?}", err);
        Self::Internal(format!("Password hashing failed: {}", err))
    }
}
