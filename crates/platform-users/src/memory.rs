//! In-memory user store
//!
//! Suitable for single-process applications and testing. Records are kept in
//! insertion order, which is the order [`UserStore::all`] returns them in.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{UsersError, UsersResult};
use crate::query::UserQuery;
use crate::store::UserStore;
use crate::user::User;

/// In-memory [`UserStore`] implementation.
///
/// Writes take an exclusive lock over the whole record set, so concurrent
/// writes to the same record are serialized.
///
/// The store enforces:
/// - one record per `name` + `provider` + `scheme` identity
/// - at most one role per organization within a record
pub struct MemoryUserStore {
    /// Stored records, in insertion order
    users: Arc<RwLock<Vec<User>>>,
}

impl std::fmt::Debug for MemoryUserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryUserStore").finish_non_exhaustive()
    }
}

impl MemoryUserStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Check whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    fn check_roles(user: &User) -> UsersResult<()> {
        match user.duplicate_organization() {
            Some(org) => Err(UsersError::validation(format!(
                "user has more than one role in organization {}",
                org
            ))),
            None => Ok(()),
        }
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn get(&self, query: &UserQuery) -> UsersResult<User> {
        query.validate()?;

        let users = self.users.read().await;
        users
            .iter()
            .find(|u| query.matches(u))
            .cloned()
            .ok_or(UsersError::NotFound)
    }

    async fn add(&self, mut user: User) -> UsersResult<User> {
        Self::check_roles(&user)?;

        let mut users = self.users.write().await;
        let taken = users
            .iter()
            .any(|u| u.same_identity(&user) || (user.id.is_some() && u.id == user.id));
        if taken {
            return Err(UsersError::AlreadyExists);
        }

        let id = *user.id.get_or_insert_with(Uuid::now_v7);
        users.push(user.clone());

        tracing::debug!(user_id = %id, name = %user.name, "Added user");
        Ok(user)
    }

    async fn update(&self, user: &User) -> UsersResult<()> {
        let id = user.id.ok_or(UsersError::NotFound)?;
        Self::check_roles(user)?;

        let mut users = self.users.write().await;
        if users
            .iter()
            .any(|u| u.id != Some(id) && u.same_identity(user))
        {
            return Err(UsersError::AlreadyExists);
        }

        let stored = users
            .iter_mut()
            .find(|u| u.id == Some(id))
            .ok_or(UsersError::NotFound)?;
        *stored = user.clone();

        tracing::debug!(user_id = %id, roles = user.roles.len(), "Updated user");
        Ok(())
    }

    async fn delete(&self, user: &User) -> UsersResult<()> {
        let id = user.id.ok_or(UsersError::NotFound)?;

        let mut users = self.users.write().await;
        let index = users
            .iter()
            .position(|u| u.id == Some(id))
            .ok_or(UsersError::NotFound)?;
        users.remove(index);

        tracing::debug!(user_id = %id, "Deleted user");
        Ok(())
    }

    async fn all(&self) -> UsersResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }
}
