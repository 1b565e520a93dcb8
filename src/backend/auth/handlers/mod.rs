//! Authentication Handlers Module
//!
//! HTTP handlers for registration, login and the current-user lookup.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── register.rs  - User registration handler
//! ├── login.rs     - User authentication handler
//! └── me.rs        - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/users - User registration
//! - **`login`** - POST /api/auth - User authentication
//! - **`get_me`** - GET /api/auth - Current user (private)

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

// Re-export commonly used types
pub use types::{LoginRequest, RegisterRequest, TokenResponse};

// Re-export handlers
pub use login::login;
pub use me::get_me;
pub use register::register;
