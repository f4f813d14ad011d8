//! # Platform Tenancy
//!
//! This crate provides organization-scoped access to platform user stores,
//! shared across Verity, NoteMan, and ShipCheck applications.
//!
//! ## Overview
//!
//! A backing [`UserStore`](platform_users::UserStore) keeps complete user
//! records with roles for every organization. The platform-tenancy crate
//! layers a single organization over it:
//! - **Context**: The active organization for a call
//! - **Scoped store**: Filtered reads and membership-checked writes
//! - **Roles**: Built-in role names for strict role policies
//! - **Config**: Role name policy loaded from the environment
//!
//! ## Architecture
//!
//! ```text
//! caller ─ OrganizationContext ─→ OrganizationUsersStore
//!                                    ├─ validate role (exactly one, this org)
//!                                    ├─ read full record ─→ UserStore
//!                                    ├─ merge / prune this org's role
//!                                    └─ write full record ─→ UserStore
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use platform_tenancy::{OrganizationContext, OrganizationUsersStore};
//! use platform_users::{MemoryUserStore, User, UserQuery};
//!
//! # async fn example() -> platform_users::UsersResult<()> {
//! let users = OrganizationUsersStore::new(MemoryUserStore::new());
//!
//! let acme = OrganizationContext::new("acme");
//! let user = User::new("docbrown", "github", "oauth2").with_role("acme", "editor");
//! users.add(&acme, user).await?;
//!
//! // Visible from its own organization only
//! let query = UserQuery::by_identity("docbrown", "github", "oauth2");
//! assert!(users.get(&acme, &query).await.is_ok());
//! assert!(users.get(&OrganizationContext::new("globex"), &query).await.is_err());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod context;
pub mod roles;
pub mod users;

// Re-export main types for convenience
pub use config::{ConfigError, RolePolicy, ScopedUsersConfig};
pub use context::OrganizationContext;
pub use roles::KnownRole;
pub use users::OrganizationUsersStore;
