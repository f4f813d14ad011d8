//! # Platform Users
//!
//! This crate provides user accounts and their organization role assignments
//! for the Relay platform, together with the backing-store abstraction that
//! persists them.
//!
//! ## Overview
//!
//! The platform-users crate handles:
//! - **Users**: Accounts identified by id, or by name + provider + scheme
//! - **Roles**: One `(organization, name)` assignment per organization
//! - **Queries**: Lookup keys passed through to backing stores
//! - **Stores**: The unscoped [`UserStore`] trait and an in-memory implementation
//!
//! Stores in this crate see complete records. Organization scoping is layered
//! on top by `platform-tenancy`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use platform_users::{MemoryUserStore, User, UserQuery, UserStore};
//!
//! # async fn example() -> platform_users::UsersResult<()> {
//! let store = MemoryUserStore::new();
//!
//! let user = User::new("docbrown", "github", "oauth2").with_role("1336", "editor");
//! let added = store.add(user).await?;
//!
//! let fetched = store
//!     .get(&UserQuery::by_identity("docbrown", "github", "oauth2"))
//!     .await?;
//! assert_eq!(fetched.id, added.id);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod memory;
pub mod query;
pub mod store;
pub mod user;

// Re-export main types for convenience
pub use error::{UsersError, UsersResult};
pub use memory::MemoryUserStore;
pub use query::UserQuery;
pub use store::UserStore;
pub use user::{Role, User};
