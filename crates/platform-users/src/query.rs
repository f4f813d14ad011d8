//! User lookup keys

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{UsersError, UsersResult};
use crate::user::User;

/// Lookup key for a single user.
///
/// A query selects a user either by store-assigned `id`, or by the full
/// `name` + `provider` + `scheme` identity. When `id` is set it takes
/// precedence.
///
/// # Examples
///
/// ```
/// use platform_users::{User, UserQuery};
///
/// let user = User::new("docbrown", "github", "oauth2");
/// let query = UserQuery::by_identity("docbrown", "github", "oauth2");
/// assert!(query.matches(&user));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserQuery {
    /// Store-assigned identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    /// Login name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Authentication provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    /// Authentication scheme
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
}

impl UserQuery {
    /// Query a user by identifier.
    pub fn by_id(id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Query a user by name, provider and scheme.
    pub fn by_identity(
        name: impl Into<String>,
        provider: impl Into<String>,
        scheme: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            provider: Some(provider.into()),
            scheme: Some(scheme.into()),
        }
    }

    /// Query the identity (name, provider, scheme) of an existing user record.
    pub fn identity_of(user: &User) -> Self {
        Self::by_identity(&user.name, &user.provider, &user.scheme)
    }

    /// Check that the query identifies at most one user.
    ///
    /// Requires either an `id`, or all three identity fields.
    pub fn validate(&self) -> UsersResult<()> {
        if self.id.is_some() {
            return Ok(());
        }
        match (&self.name, &self.provider, &self.scheme) {
            (Some(_), Some(_), Some(_)) => Ok(()),
            _ => Err(UsersError::InvalidQuery(
                "must specify either id, or name, provider, and scheme".to_string(),
            )),
        }
    }

    /// Check whether a user record matches this query.
    pub fn matches(&self, user: &User) -> bool {
        if let Some(id) = self.id {
            return user.id == Some(id);
        }
        match (&self.name, &self.provider, &self.scheme) {
            (Some(name), Some(provider), Some(scheme)) => {
                user.name == *name && user.provider == *provider && user.scheme == *scheme
            }
            _ => false,
        }
    }
}
