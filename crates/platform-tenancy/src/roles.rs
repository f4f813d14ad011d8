//! Built-in organization role names
//!
//! Role names on a [`Role`](platform_users::Role) are free-form strings. This
//! module defines the names the platform ships with, used when a scoped store
//! is configured to accept only known roles.

use serde::{Deserialize, Serialize};

/// Built-in role names within an organization.
///
/// Ordered from least to most privileged: Member < Viewer < Editor < Admin.
/// The ordering is informational; what a role may do is decided elsewhere.
///
/// # Examples
///
/// ```
/// use platform_tenancy::KnownRole;
///
/// assert_eq!(KnownRole::parse("EDITOR"), Some(KnownRole::Editor));
/// assert_eq!(KnownRole::Admin.as_str(), "admin");
/// assert!(KnownRole::Admin > KnownRole::Viewer);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum KnownRole {
    /// Belongs to the organization without further access
    Member = 0,

    /// Read-only access
    Viewer = 1,

    /// Can create and edit content
    Editor = 2,

    /// Can manage the organization's users
    Admin = 3,
}

impl KnownRole {
    /// All built-in roles, least privileged first.
    pub const ALL: [KnownRole; 4] = [
        KnownRole::Member,
        KnownRole::Viewer,
        KnownRole::Editor,
        KnownRole::Admin,
    ];

    /// Parse role from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(KnownRole)` if valid, `None` otherwise
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "member" => Some(Self::Member),
            "viewer" => Some(Self::Viewer),
            "editor" => Some(Self::Editor),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Get string representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Viewer => "viewer",
            Self::Editor => "editor",
            Self::Admin => "admin",
        }
    }

    /// Get a human-readable display name for the role.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Member => "Member",
            Self::Viewer => "Viewer",
            Self::Editor => "Editor",
            Self::Admin => "Admin",
        }
    }
}

impl Default for KnownRole {
    fn default() -> Self {
        Self::Member
    }
}

impl std::fmt::Display for KnownRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
