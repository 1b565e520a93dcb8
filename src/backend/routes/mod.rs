//! Routes Module
//!
//! Route configuration and router assembly.
//!
//! - **`router`** - Builds the complete router with state, tracing and fallback
//! - **`api_routes`** - Registers the `/api` endpoints
//!
//! # Dependencies
//!
//! - `backend::server::state` - Application state
//! - `backend::auth` - Registration and login handlers
//! - `backend::profile` - Profile handlers
//! - `backend::posts` - Post handlers

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
