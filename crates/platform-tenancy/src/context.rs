//! Organization context for scoped operations
//!
//! This module provides the [`OrganizationContext`] type that carries the
//! active organization for a single call into a scoped store. The context is
//! resolved once at the request boundary (e.g. from session claims) and passed
//! explicitly to every scoped operation.

use platform_users::{UsersError, UsersResult};
use serde::{Deserialize, Serialize};

/// The organization a scoped operation runs under.
///
/// A context with no organization, or with an empty organization id, is
/// "unscoped". Every scoped store operation rejects it with
/// [`UsersError::InvalidContext`].
///
/// # Examples
///
/// ```
/// use platform_tenancy::OrganizationContext;
///
/// let ctx = OrganizationContext::new("1337");
/// assert_eq!(ctx.organization().unwrap(), "1337");
///
/// assert!(OrganizationContext::unscoped().organization().is_err());
/// assert!(OrganizationContext::new("").organization().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationContext {
    /// Currently selected organization
    pub organization_id: Option<String>,
}

impl OrganizationContext {
    /// Creates a context scoped to an organization.
    ///
    /// # Arguments
    ///
    /// * `organization_id` - The active organization
    pub fn new(organization_id: impl Into<String>) -> Self {
        Self {
            organization_id: Some(organization_id.into()),
        }
    }

    /// Creates a context with no organization in scope.
    pub fn unscoped() -> Self {
        Self::default()
    }

    /// Switch to a different organization.
    pub fn switch_organization(&mut self, organization_id: impl Into<String>) {
        self.organization_id = Some(organization_id.into());
    }

    /// Clear the active organization.
    pub fn clear(&mut self) {
        self.organization_id = None;
    }

    /// Check whether an organization is in scope.
    pub fn is_scoped(&self) -> bool {
        self.organization().is_ok()
    }

    /// Resolve the active organization.
    ///
    /// # Errors
    ///
    /// [`UsersError::InvalidContext`] when no organization is set or the
    /// organization id is empty.
    pub fn organization(&self) -> UsersResult<&str> {
        match self.organization_id.as_deref() {
            Some(org) if !org.is_empty() => Ok(org),
            _ => Err(UsersError::InvalidContext),
        }
    }
}
