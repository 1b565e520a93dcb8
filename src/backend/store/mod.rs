//! Document Store
//!
//! Handlers reach persisted users, profiles and posts only through the
//! [`Store`] trait, injected as `Arc<dyn Store>` in the application state.
//!
//! # Implementations
//!
//! - **`PgStore`** - PostgreSQL via `sqlx`; nested lists live in JSONB columns
//! - **`MemoryStore`** - process-local maps, used when no database is
//!   configured and by the test suite
//!
//! # Consistency
//!
//! Each call is atomic on its own. Check-then-write sequences in handlers
//! (e.g. "already liked?" followed by `save_post`) are not, and concurrent
//! requests from one user can lose an update. `save_*` replaces the whole
//! document.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::backend::posts::model::Post;
use crate::backend::profile::model::Profile;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Store failures; every one of these is unexpected from a handler's view
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    /// A unique index rejected the write
    #[error("Duplicate {0}")]
    Duplicate(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        let is_unique_violation = err
            .as_database_error()
            .map(|db| db.is_unique_violation())
            .unwrap_or(false);

        if is_unique_violation {
            let constraint = err
                .as_database_error()
                .and_then(|db| db.constraint())
                .unwrap_or("key")
                .to_string();
            Self::Duplicate(constraint)
        } else {
            Self::Database(err)
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait Store: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>>;

    /// Every user whose id is in `ids`, in no particular order; unknown ids
    /// are skipped
    async fn find_users_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<User>>;

    /// Insert a new user; fails with `Duplicate` if the email is taken
    async fn insert_user(&self, user: &User) -> StoreResult<()>;

    async fn find_profile_by_user(&self, user_id: Uuid) -> StoreResult<Option<Profile>>;

    /// All profiles, oldest first
    async fn list_profiles(&self) -> StoreResult<Vec<Profile>>;

    /// Insert or replace the profile belonging to `profile.user`
    async fn save_profile(&self, profile: &Profile) -> StoreResult<()>;

    /// Remove a user's profile and the user record itself
    async fn delete_account(&self, user_id: Uuid) -> StoreResult<()>;

    async fn insert_post(&self, post: &Post) -> StoreResult<()>;

    /// All posts, newest first
    async fn list_posts(&self) -> StoreResult<Vec<Post>>;

    async fn find_post(&self, id: Uuid) -> StoreResult<Option<Post>>;

    /// Replace an existing post document
    async fn save_post(&self, post: &Post) -> StoreResult<()>;

    async fn delete_post(&self, id: Uuid) -> StoreResult<()>;
}
