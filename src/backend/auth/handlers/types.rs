/**
 * Authentication Handler Types
 *
 * Request and response types used by the registration, login and
 * current-user handlers.
 *
 * Request fields are optional at the type level so that a missing field
 * reaches validation and produces a field error instead of a body
 * deserialization rejection.
 */

use serde::{Deserialize, Serialize};

/// Registration request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Plain password, hashed before storage
    #[serde(default)]
    pub password: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Returned by registration and login
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    pub token: String,
}
