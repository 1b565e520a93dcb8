//! Authentication Module
//!
//! This module handles user registration, login and session tokens.
//!
//! # Architecture
//!
//! - **`users`** - User record, password hashing and avatar derivation
//! - **`sessions`** - Token issuing and verification (`TokenService`)
//! - **`handlers`** - HTTP handlers for the authentication endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email and password → user stored → token returned
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Private routes**: token sent in `x-auth-token` → verified by the gate
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are stateless HS256 JWTs, valid for 10 hours by default
//! - Unknown email and wrong password both return "Invalid credentials"

/// User data model and credential helpers
pub mod users;

/// Session token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{get_me, login, register};
pub use handlers::{LoginRequest, RegisterRequest, TokenResponse};
pub use sessions::{TokenError, TokenService};
