//! Backend Module
//!
//! This module contains all server-side code for DevConnect, a developer
//! social network API: accounts, profiles and posts with likes and
//! comments.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Registration, login, session tokens
//! - **`middleware`** - The authentication gate for private routes
//! - **`profile`** - Profiles with experience and education entries
//! - **`posts`** - Posts, likes and comments
//! - **`store`** - Document store trait with PostgreSQL and in-memory backends
//! - **`error`** - API error type and its HTTP mapping
//! - **`validation`** - Request field checks
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Accounts and tokens
//! ├── middleware/     - Authentication gate
//! ├── profile/        - Profile documents and handlers
//! ├── posts/          - Post documents and handlers
//! ├── store/          - Persistence
//! ├── error/          - Error types
//! └── validation.rs   - Field validation
//! ```
//!
//! # Request Flow
//!
//! Request → body validation → authentication gate (private routes) →
//! store read/write → JSON response. Handlers hold no state between
//! requests; everything lives in the store.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, ApiError>`. Store and signing failures are
//! logged and reported as `500 {"msg": "Server error"}`.
//!
//! # Example
//!
//! ```rust,no_run
//! use devconnect::backend::server::{create_app, AppConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(AppConfig::from_env()?).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:4000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Developer profiles
pub mod profile;

/// Posts, likes and comments
pub mod posts;

/// Document persistence
pub mod store;

/// Request field validation
pub mod validation;

/// Re-export commonly used types
pub use error::ApiError;
pub use server::{create_app, AppConfig, AppState};
