//! Backing store abstraction
//!
//! A [`UserStore`] persists complete user records, including roles for every
//! organization. It knows nothing about organizational scope.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::UsersResult;
use crate::query::UserQuery;
use crate::user::User;

/// Trait for unscoped user storage operations.
///
/// Implementations are expected to serialize concurrent writes to the same
/// record. Callers layering read-modify-write sequences on top of a store rely
/// on that guarantee.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Get the user matching a query.
    ///
    /// Returns [`UsersError::NotFound`](crate::UsersError::NotFound) when no
    /// user matches.
    async fn get(&self, query: &UserQuery) -> UsersResult<User>;

    /// Persist a new user, returning the stored record with its assigned id.
    async fn add(&self, user: User) -> UsersResult<User>;

    /// Replace a stored user record (matched by id).
    async fn update(&self, user: &User) -> UsersResult<()>;

    /// Remove a stored user record (matched by id).
    async fn delete(&self, user: &User) -> UsersResult<()>;

    /// List every stored user, in the store's enumeration order.
    async fn all(&self) -> UsersResult<Vec<User>>;
}

#[async_trait]
impl<T: UserStore + ?Sized> UserStore for Arc<T> {
    async fn get(&self, query: &UserQuery) -> UsersResult<User> {
        (**self).get(query).await
    }

    async fn add(&self, user: User) -> UsersResult<User> {
        (**self).add(user).await
    }

    async fn update(&self, user: &User) -> UsersResult<()> {
        (**self).update(user).await
    }

    async fn delete(&self, user: &User) -> UsersResult<()> {
        (**self).delete(user).await
    }

    async fn all(&self) -> UsersResult<Vec<User>> {
        (**self).all().await
    }
}

#[async_trait]
impl<T: UserStore + ?Sized> UserStore for Box<T> {
    async fn get(&self, query: &UserQuery) -> UsersResult<User> {
        (**self).get(query).await
    }

    async fn add(&self, user: User) -> UsersResult<User> {
        (**self).add(user).await
    }

    async fn update(&self, user: &User) -> UsersResult<()> {
        (**self).update(user).await
    }

    async fn delete(&self, user: &User) -> UsersResult<()> {
        (**self).delete(user).await
    }

    async fn all(&self) -> UsersResult<Vec<User>> {
        (**self).all().await
    }
}
