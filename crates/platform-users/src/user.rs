//! User domain models
//!
//! This module provides the user account record and the per-organization role
//! assignments it carries. A stored user holds roles for every organization it
//! belongs to; scoped views reduce that to a single organization.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A role held by a user within one organization.
///
/// # Examples
///
/// ```
/// use platform_users::Role;
///
/// let role = Role::new("1337", "editor");
/// assert!(role.is_complete());
/// assert!(!Role::new("", "editor").is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Role {
    /// Organization the role applies to
    pub organization: String,

    /// Role name within the organization (e.g. "editor")
    pub name: String,
}

impl Role {
    /// Creates a new role assignment.
    pub fn new(organization: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            name: name.into(),
        }
    }

    /// Check that both the organization and the name are set.
    pub fn is_complete(&self) -> bool {
        !self.organization.is_empty() && !self.name.is_empty()
    }
}

/// A user account as persisted by a backing store.
///
/// Users are identified by a store-assigned `id`, and by the combination of
/// `name`, `provider` and `scheme` (e.g. `docbrown` via `github` over `oauth2`).
///
/// # Examples
///
/// ```
/// use platform_users::{Role, User};
///
/// let user = User::new("docbrown", "github", "oauth2")
///     .with_role("1336", "editor")
///     .with_role("1337", "viewer");
///
/// let scoped = user.scoped_to("1337").unwrap();
/// assert_eq!(scoped.roles, vec![Role::new("1337", "viewer")]);
/// assert!(user.scoped_to("2330").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier, unset until the user is added
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    /// Login name
    pub name: String,

    /// Authentication provider (e.g. "github")
    pub provider: String,

    /// Authentication scheme (e.g. "oauth2")
    pub scheme: String,

    /// Platform-wide administrator flag
    #[serde(default)]
    pub super_admin: bool,

    /// Role assignments, at most one per organization
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl User {
    /// Creates a new user with no id and no roles.
    pub fn new(
        name: impl Into<String>,
        provider: impl Into<String>,
        scheme: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            provider: provider.into(),
            scheme: scheme.into(),
            super_admin: false,
            roles: Vec::new(),
        }
    }

    /// Add a role assignment (builder style).
    pub fn with_role(mut self, organization: impl Into<String>, name: impl Into<String>) -> Self {
        self.roles.push(Role::new(organization, name));
        self
    }

    /// Set the store-assigned identifier (builder style).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Get the role held in an organization, if any.
    pub fn role_in(&self, organization: &str) -> Option<&Role> {
        self.roles.iter().find(|r| r.organization == organization)
    }

    /// Build the view of this user as seen from one organization.
    ///
    /// The returned copy carries only the role for `organization`. Returns
    /// `None` when the user has no role there.
    pub fn scoped_to(&self, organization: &str) -> Option<User> {
        let role = self.role_in(organization)?.clone();
        Some(User {
            roles: vec![role],
            ..self.clone()
        })
    }

    /// Grant a role, replacing any existing role for the same organization.
    ///
    /// An existing entry is overwritten in place so the order of the other
    /// organizations' roles is preserved; otherwise the role is appended.
    pub fn set_role(&mut self, role: Role) {
        match self
            .roles
            .iter_mut()
            .find(|r| r.organization == role.organization)
        {
            Some(existing) => *existing = role,
            None => self.roles.push(role),
        }
    }

    /// Remove the role for an organization, returning it if present.
    pub fn remove_role(&mut self, organization: &str) -> Option<Role> {
        let index = self
            .roles
            .iter()
            .position(|r| r.organization == organization)?;
        Some(self.roles.remove(index))
    }

    /// Check whether two users share the same name, provider and scheme.
    pub fn same_identity(&self, other: &User) -> bool {
        self.name == other.name && self.provider == other.provider && self.scheme == other.scheme
    }

    /// Find the first organization that appears in more than one role.
    pub fn duplicate_organization(&self) -> Option<&str> {
        self.roles.iter().enumerate().find_map(|(i, role)| {
            self.roles[..i]
                .iter()
                .any(|earlier| earlier.organization == role.organization)
                .then_some(role.organization.as_str())
        })
    }
}
