//! Backend Error Module
//!
//! Error types returned by HTTP handlers and their conversion to responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - ApiError and FieldError definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! Store and token failures convert into `ApiError` via `From`, so handlers
//! propagate them with `?`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::{ApiError, FieldError};
