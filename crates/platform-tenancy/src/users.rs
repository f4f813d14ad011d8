//! Organization-scoped user store
//!
//! [`OrganizationUsersStore`] wraps an unscoped [`UserStore`] and restricts
//! every operation to the organization in an [`OrganizationContext`]:
//!
//! - reads only return users with a role in the organization, reduced to that role
//! - writes carry exactly one role, for the organization, and are merged into
//!   the full record so roles held in other organizations survive

use platform_users::{Role, User, UserQuery, UserStore, UsersError, UsersResult};
use tracing::{debug, instrument, warn};

use crate::config::ScopedUsersConfig;
use crate::context::OrganizationContext;

/// A user store restricted to one organization per call.
///
/// Holds no state besides the backing store and its configuration. Mutations
/// are read-modify-write sequences against the backing store: the full record
/// is read, the active organization's role is merged in or removed, and the
/// result is written back. Nothing is written when validation or the read
/// fails.
///
/// # Concurrency
///
/// No compare-and-swap is performed between the read and the write. The
/// backing store is assumed to serialize writes to a record; concurrent
/// scoped writes to the same user from different organizations are
/// last-write-wins on the full record.
///
/// # Examples
///
/// ```rust,no_run
/// use platform_tenancy::{OrganizationContext, OrganizationUsersStore};
/// use platform_users::{MemoryUserStore, Role, User};
///
/// # async fn example() -> platform_users::UsersResult<()> {
/// let store = OrganizationUsersStore::new(MemoryUserStore::new());
/// let ctx = OrganizationContext::new("1336");
///
/// let user = User::new("docbrown", "github", "oauth2").with_role("1336", "editor");
/// let added = store.add(&ctx, user).await?;
/// assert_eq!(added.roles, vec![Role::new("1336", "editor")]);
///
/// let visible = store.all(&ctx).await?;
/// assert_eq!(visible.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct OrganizationUsersStore<S> {
    /// Unscoped backing store
    store: S,

    /// Role validation settings
    config: ScopedUsersConfig,
}

impl<S: UserStore> OrganizationUsersStore<S> {
    /// Wrap a backing store with the default configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, ScopedUsersConfig::default())
    }

    /// Wrap a backing store with an explicit configuration.
    pub fn with_config(store: S, config: ScopedUsersConfig) -> Self {
        Self { store, config }
    }

    /// Get the unscoped backing store.
    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Get a user as seen from the active organization.
    ///
    /// Users that exist but hold no role in the organization are reported as
    /// [`UsersError::NotFound`].
    #[instrument(skip(self))]
    pub async fn get(&self, ctx: &OrganizationContext, query: &UserQuery) -> UsersResult<User> {
        let organization = ctx.organization()?;
        let user = self.store.get(query).await?;

        user.scoped_to(organization).ok_or_else(|| {
            debug!(organization, "User has no role in organization");
            UsersError::NotFound
        })
    }

    /// Add a user to the active organization.
    ///
    /// The user must carry exactly one role, for the active organization. If a
    /// user with the same name, provider and scheme already exists, the role is
    /// granted on that record instead of creating a new one.
    ///
    /// Returns the scoped view of the stored user.
    #[instrument(skip(self, user), fields(user = %user.name))]
    pub async fn add(&self, ctx: &OrganizationContext, user: User) -> UsersResult<User> {
        let organization = ctx.organization()?;
        let role = self.checked_role(organization, &user.roles)?;

        match self.store.get(&UserQuery::identity_of(&user)).await {
            Ok(existing) => {
                self.grant_organization_role(organization, existing, role)
                    .await
            }
            Err(UsersError::NotFound) => self.create_new(organization, user, role).await,
            Err(e) => Err(e),
        }
    }

    /// Update the active organization's role for a user.
    ///
    /// Only the role is taken from `user`; the stored record's identity and
    /// other organizations' roles are left as they are.
    #[instrument(skip(self, user), fields(user_id = ?user.id))]
    pub async fn update(&self, ctx: &OrganizationContext, user: &User) -> UsersResult<()> {
        let organization = ctx.organization()?;
        let role = self.checked_role(organization, &user.roles)?;

        let mut current = self.current(user).await?;
        current.set_role(role);

        debug!(organization, "Updating organization role");
        self.store.update(&current).await
    }

    /// Remove a user from the active organization.
    ///
    /// The user record itself is deleted once it no longer holds a role in any
    /// organization. A user without a role in the active organization is left
    /// untouched.
    #[instrument(skip(self, user), fields(user_id = ?user.id))]
    pub async fn delete(&self, ctx: &OrganizationContext, user: &User) -> UsersResult<()> {
        let organization = ctx.organization()?;
        let mut current = self.current(user).await?;

        if current.remove_role(organization).is_none() {
            debug!(organization, "User has no role in organization, nothing to remove");
            return Ok(());
        }

        if current.roles.is_empty() {
            debug!(organization, "Last organization role removed, deleting user");
            self.store.delete(&current).await
        } else {
            debug!(
                organization,
                remaining = current.roles.len(),
                "Removing organization role"
            );
            self.store.update(&current).await
        }
    }

    /// List the users of the active organization.
    ///
    /// Each user is reduced to its role in the organization. Order follows the
    /// backing store's enumeration order.
    #[instrument(skip(self))]
    pub async fn all(&self, ctx: &OrganizationContext) -> UsersResult<Vec<User>> {
        let organization = ctx.organization()?;
        let users = self.store.all().await?;

        Ok(users
            .iter()
            .filter_map(|u| u.scoped_to(organization))
            .collect())
    }

    /// Count the users of the active organization.
    pub async fn num(&self, ctx: &OrganizationContext) -> UsersResult<usize> {
        self.all(ctx).await.map(|users| users.len())
    }

    async fn create_new(
        &self,
        organization: &str,
        mut user: User,
        role: Role,
    ) -> UsersResult<User> {
        debug!(organization, "Creating new user");

        user.id = None;
        user.roles = vec![role];
        let created = self.store.add(user).await?;

        created.scoped_to(organization).ok_or(UsersError::NotFound)
    }

    async fn grant_organization_role(
        &self,
        organization: &str,
        mut existing: User,
        role: Role,
    ) -> UsersResult<User> {
        debug!(
            organization,
            user_id = ?existing.id,
            "Granting organization role to existing user"
        );

        existing.set_role(role);
        self.store.update(&existing).await?;

        existing.scoped_to(organization).ok_or(UsersError::NotFound)
    }

    /// Fetch the full stored record for a user by id.
    async fn current(&self, user: &User) -> UsersResult<User> {
        let id = user.id.ok_or(UsersError::NotFound)?;
        self.store.get(&UserQuery::by_id(id)).await
    }

    /// Check the roles supplied on a write and return the single valid one.
    fn checked_role(&self, organization: &str, roles: &[Role]) -> UsersResult<Role> {
        self.validate_roles(organization, roles).map_err(|e| {
            warn!(organization, error = %e, "Rejected role assignment");
            e
        })
    }

    fn validate_roles(&self, organization: &str, roles: &[Role]) -> UsersResult<Role> {
        let role = match roles {
            [role] => role,
            _ => {
                return Err(UsersError::validation(format!(
                    "user must have exactly one role, found {}",
                    roles.len()
                )))
            }
        };

        if role.organization.is_empty() {
            return Err(UsersError::validation("role organization is empty"));
        }
        if role.name.is_empty() {
            return Err(UsersError::validation("role name is empty"));
        }
        if role.organization != organization {
            return Err(UsersError::validation(format!(
                "role organization {} does not match organization {}",
                role.organization, organization
            )));
        }
        if !self.config.accepts_role(&role.name) {
            return Err(UsersError::validation(format!(
                "role {} is not permitted",
                role.name
            )));
        }

        Ok(role.clone())
    }
}
