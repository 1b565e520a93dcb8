/**
 * Session Tokens
 *
 * This module issues and verifies the signed, time-limited tokens that
 * identify a user on private routes. Tokens are HS256 JWTs whose payload is
 * `{ "user": { "id": <uuid> }, "iat": <secs>, "exp": <secs> }`.
 *
 * Verification is stateless: nothing about issued tokens is persisted.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Default token lifetime in seconds
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 36000;

/// Longest accepted token lifetime (one year)
pub const MAX_TOKEN_TTL_SECS: i64 = 365 * 24 * 60 * 60;

/// Identity carried inside a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUser {
    pub id: Uuid,
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user: TokenUser,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Token verification and signing failures
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signature mismatch, wrong algorithm or malformed token
    #[error("Invalid token")]
    InvalidToken,

    /// Token is at or past its expiration instant
    #[error("Token expired")]
    Expired,

    #[error("Failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// Issues and verifies session tokens with a shared secret
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// Create a token service
    ///
    /// # Arguments
    /// * `secret` - Shared HMAC secret
    /// * `ttl_secs` - Lifetime of every issued token, clamped to
    ///   `1..=MAX_TOKEN_TTL_SECS`
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        let ttl = Duration::try_seconds(ttl_secs.clamp(1, MAX_TOKEN_TTL_SECS))
            .unwrap_or_else(|| Duration::seconds(DEFAULT_TOKEN_TTL_SECS));

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Issue a token for a user, valid from now for the configured lifetime
    pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issue a token as if the current time were `now`
    pub fn issue_at(&self, user_id: Uuid, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims {
            user: TokenUser { id: user_id },
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(TokenError::Signing)
    }

    /// Verify a token and return the user ID it carries
    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token as if the current time were `now`
    ///
    /// A token is expired at its `exp` instant, not one second later, and
    /// no clock leeway is granted.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Uuid, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked below against the supplied clock.
        validation.validate_exp = false;
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            tracing::debug!("Token rejected: {:?}", e);
            TokenError::InvalidToken
        })?;

        if now.timestamp() >= data.claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(data.claims.user.id)
    }
}
