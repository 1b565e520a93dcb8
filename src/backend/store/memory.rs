/**
 * In-Memory Store
 *
 * Keeps every document in process-local maps behind a single
 * `tokio::sync::RwLock`. Nothing survives a restart. Email uniqueness is
 * enforced on insert, mirroring the unique index of the database schema.
 */

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::backend::posts::model::Post;
use crate::backend::profile::model::Profile;
use crate::backend::store::{Store, StoreError, StoreResult};

#[derive(Default)]
struct Documents {
    users: HashMap<Uuid, User>,
    /// Keyed by owning user
    profiles: HashMap<Uuid, Profile>,
    posts: HashMap<Uuid, Post>,
}

#[derive(Default)]
pub struct MemoryStore {
    documents: RwLock<Documents>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let documents = self.documents.read().await;
        Ok(documents.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        Ok(self.documents.read().await.users.get(&id).cloned())
    }

    async fn find_users_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<User>> {
        let documents = self.documents.read().await;
        Ok(ids
            .iter()
            .collect::<HashSet<_>>()
            .into_iter()
            .filter_map(|id| documents.users.get(id).cloned())
            .collect())
    }

    async fn insert_user(&self, user: &User) -> StoreResult<()> {
        let mut documents = self.documents.write().await;
        if documents.users.values().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate("users_email_key".to_string()));
        }
        documents.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn find_profile_by_user(&self, user_id: Uuid) -> StoreResult<Option<Profile>> {
        Ok(self.documents.read().await.profiles.get(&user_id).cloned())
    }

    async fn list_profiles(&self) -> StoreResult<Vec<Profile>> {
        let mut profiles: Vec<Profile> =
            self.documents.read().await.profiles.values().cloned().collect();
        profiles.sort_by_key(|p| p.date);
        Ok(profiles)
    }

    async fn save_profile(&self, profile: &Profile) -> StoreResult<()> {
        self.documents
            .write()
            .await
            .profiles
            .insert(profile.user, profile.clone());
        Ok(())
    }

    async fn delete_account(&self, user_id: Uuid) -> StoreResult<()> {
        let mut documents = self.documents.write().await;
        documents.profiles.remove(&user_id);
        documents.users.remove(&user_id);
        Ok(())
    }

    async fn insert_post(&self, post: &Post) -> StoreResult<()> {
        self.documents.write().await.posts.insert(post.id, post.clone());
        Ok(())
    }

    async fn list_posts(&self) -> StoreResult<Vec<Post>> {
        let mut posts: Vec<Post> = self.documents.read().await.posts.values().cloned().collect();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(posts)
    }

    async fn find_post(&self, id: Uuid) -> StoreResult<Option<Post>> {
        Ok(self.documents.read().await.posts.get(&id).cloned())
    }

    async fn save_post(&self, post: &Post) -> StoreResult<()> {
        self.documents.write().await.posts.insert(post.id, post.clone());
        Ok(())
    }

    async fn delete_post(&self, id: Uuid) -> StoreResult<()> {
        self.documents.write().await.posts.remove(&id);
        Ok(())
    }
}
