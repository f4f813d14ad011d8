//! Configuration for organization-scoped user stores.
//!
//! Configuration is loaded from environment variables with defaults that
//! accept any non-empty role name.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::roles::KnownRole;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue {
        /// Configuration key.
        key: String,
        /// Error message.
        message: String,
    },
}

/// Which role names a scoped store accepts on writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RolePolicy {
    /// Any non-empty role name.
    #[default]
    Any,

    /// Only [`KnownRole`] names, plus any configured extra roles.
    Known,
}

impl RolePolicy {
    /// Parse a policy name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "any" => Some(Self::Any),
            "known" => Some(Self::Known),
            _ => None,
        }
    }
}

/// Settings for an [`OrganizationUsersStore`](crate::OrganizationUsersStore).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopedUsersConfig {
    /// Role name policy applied to added and updated roles.
    #[serde(default)]
    pub role_policy: RolePolicy,

    /// Additional role names accepted under [`RolePolicy::Known`].
    #[serde(default)]
    pub extra_roles: Vec<String>,
}

impl ScopedUsersConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ORG_USERS_ROLE_POLICY`: `any` or `known` (default: any)
    /// - `ORG_USERS_EXTRA_ROLES`: comma-separated extra role names (default: none)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let role_policy = match var("ORG_USERS_ROLE_POLICY") {
            Some(value) => RolePolicy::parse(&value).ok_or_else(|| ConfigError::InvalidValue {
                key: "ORG_USERS_ROLE_POLICY".to_string(),
                message: format!("expected 'any' or 'known', got '{}'", value),
            })?,
            None => RolePolicy::default(),
        };

        let extra_roles = var("ORG_USERS_EXTRA_ROLES")
            .map(|s| {
                s.split(',')
                    .map(|r| r.trim().to_string())
                    .filter(|r| !r.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let config = Self {
            role_policy,
            extra_roles,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extra_roles.iter().any(|r| r.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                key: "extra_roles".to_string(),
                message: "role names must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Check whether a role name is accepted on writes.
    ///
    /// Names are matched exactly, including case, against both the built-in
    /// and the extra role names. Empty names are never accepted.
    pub fn accepts_role(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        match self.role_policy {
            RolePolicy::Any => true,
            RolePolicy::Known => {
                KnownRole::ALL.iter().any(|r| r.as_str() == name)
                    || self.extra_roles.iter().any(|r| r == name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ScopedUsersConfig::default();
        assert_eq!(config.role_policy, RolePolicy::Any);
        assert!(config.extra_roles.is_empty());
        assert!(config.accepts_role("The HillBilliettas"));
        assert!(!config.accepts_role(""));
    }

    #[test]
    fn test_known_policy() {
        let config = ScopedUsersConfig {
            role_policy: RolePolicy::Known,
            extra_roles: vec!["auditor".to_string()],
        };

        assert!(config.accepts_role("editor"));
        assert!(config.accepts_role("auditor"));
        assert!(!config.accepts_role("The HillBilliettas"));
    }

    #[test]
    fn test_known_policy_is_case_sensitive() {
        let config = ScopedUsersConfig {
            role_policy: RolePolicy::Known,
            extra_roles: vec!["auditor".to_string()],
        };

        assert!(!config.accepts_role("ADMIN"));
        assert!(!config.accepts_role("Editor"));
        assert!(!config.accepts_role("AUDITOR"));
        assert!(config.accepts_role("admin"));
        assert!(config.accepts_role("auditor"));
    }

    #[test]
    fn test_from_vars() {
        let config = ScopedUsersConfig::from_vars(vars(&[
            ("ORG_USERS_ROLE_POLICY", "Known"),
            ("ORG_USERS_EXTRA_ROLES", "auditor, billing,,"),
        ]))
        .unwrap();

        assert_eq!(config.role_policy, RolePolicy::Known);
        assert_eq!(config.extra_roles, vec!["auditor", "billing"]);
    }

    #[test]
    fn test_from_vars_defaults() {
        let config = ScopedUsersConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config, ScopedUsersConfig::default());
    }

    #[test]
    fn test_from_vars_invalid_policy() {
        let result = ScopedUsersConfig::from_vars(vars(&[("ORG_USERS_ROLE_POLICY", "strict")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_validate() {
        let config = ScopedUsersConfig {
            role_policy: RolePolicy::Known,
            extra_roles: vec![" ".to_string()],
        };
        assert!(config.validate().is_err());
    }
}
