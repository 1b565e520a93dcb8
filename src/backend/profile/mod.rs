//! Profile Module
//!
//! Developer profiles: one per user, holding status, skills, social links
//! and nested experience and education entries.
//!
//! - **`model`** - Profile document and entry types
//! - **`types`** - Request bodies
//! - **`handlers`** - HTTP handlers for `/api/profile`

pub mod model;

pub mod types;

pub mod handlers;

pub use model::{Education, Experience, Profile, ProfileView, Social};
