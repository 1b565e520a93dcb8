//! DevConnect - Main Library
//!
//! DevConnect is a REST backend for a small developer social network:
//! account registration and login with signed session tokens, developer
//! profiles with experience and education, and posts with likes and
//! comments.
//!
//! # Module Structure
//!
//! - **`backend`** - Axum HTTP server, handlers, authentication and storage
//!
//! # Usage
//!
//! ```rust,no_run
//! use devconnect::backend::server::{create_app, AppConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(AppConfig::from_env()?).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Storage
//!
//! With `DATABASE_URL` set, documents are stored in PostgreSQL (migrations
//! in `migrations/` run at startup). Without it the server keeps everything
//! in memory.

/// Backend server-side code
pub mod backend;
