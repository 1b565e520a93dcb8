/**
 * User Model
 *
 * This module defines the persisted user record and the credential helpers
 * used by registration and login: password hashing and the avatar URL
 * derived from the email address.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// User struct representing a user in the store
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Avatar image URL
    pub avatar: String,
    /// Registration timestamp
    pub date: DateTime<Utc>,
}

impl User {
    /// Build a new user record ready for insertion
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let avatar = avatar_url(&email);
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            avatar,
            date: Utc::now(),
        }
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            name: self.name.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// Public identity of a user, as joined onto profiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub avatar: String,
}

/// Derive a Gravatar URL from an email address
///
/// The address is trimmed and lower-cased before hashing, so the same
/// mailbox always maps to the same avatar. Size 200, PG rating, and the
/// "mystery person" fallback image.
pub fn avatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = Sha256::digest(normalized.as_bytes());
    format!("//www.gravatar.com/avatar/{:x}?s=200&r=pg&d=mm", digest)
}

/// Hash a password with bcrypt at the given cost
pub fn hash_password(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, cost)
}

/// Verify a password against a stored bcrypt hash
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, bcrypt::BcryptError> {
    bcrypt::verify(password, password_hash)
}
