//! Posts Module
//!
//! Posts with nested likes and comments.
//!
//! - **`model`** - Post, like and comment documents
//! - **`types`** - Request bodies
//! - **`handlers`** - HTTP handlers for `/api/posts`

pub mod model;

pub mod types;

pub mod handlers;

pub use model::{Comment, Like, Post};
