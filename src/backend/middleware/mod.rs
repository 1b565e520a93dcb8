//! Middleware Module
//!
//! This module contains request-processing code that runs before handlers.
//!
//! # Architecture
//!
//! - **`auth`** - The authentication gate for private routes
//!
//! # Example
//!
//! ```rust,no_run
//! use devconnect::backend::middleware::AuthUser;
//!
//! // Taking `AuthUser` makes a handler private:
//! async fn handler(AuthUser(user): AuthUser) -> String {
//!     user.user_id.to_string()
//! }
//! ```

pub mod auth;

pub use auth::{authenticate, AuthUser, AuthenticatedUser, AUTH_HEADER};
