//! Server Module
//!
//! This module handles server initialization, configuration, and state
//! management for the DevConnect backend.
//!
//! # Architecture
//!
//! - **`state`** - Application state (`AppState`) and `FromRef` impls
//! - **`config`** - Environment-driven configuration (`AppConfig`)
//! - **`init`** - Store selection and router construction
//!
//! # Example
//!
//! ```rust,no_run
//! use devconnect::backend::server::{config::AppConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{AppConfig, ConfigError};
pub use init::create_app;
pub use state::AppState;
