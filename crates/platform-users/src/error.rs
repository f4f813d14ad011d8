//! Error types for user store operations
//!
//! A single error enum is shared by backing stores and the organization-scoped
//! decorator, so backing-store faults pass through the decorator unchanged.

use thiserror::Error;

/// User store error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsersError {
    /// No active organization was supplied with the call
    #[error("Invalid context: no organization in scope")]
    InvalidContext,

    /// Supplied user or role data is malformed
    #[error("Validation error: {0}")]
    Validation(String),

    /// No user matched the query, or the user is outside the active organization
    #[error("User not found")]
    NotFound,

    /// A user with the same name, provider and scheme already exists
    #[error("User already exists")]
    AlreadyExists,

    /// The query does not identify a user
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Backing store failure (I/O, durability, connectivity)
    #[error("Store error: {0}")]
    Store(String),
}

/// Result type for user store operations.
pub type UsersResult<T> = Result<T, UsersError>;

impl UsersError {
    /// Shorthand for a [`UsersError::Validation`] error.
    pub fn validation(message: impl Into<String>) -> Self {
        UsersError::Validation(message.into())
    }

    /// Check if this error should be logged at error level.
    ///
    /// Rejected input and missing users are expected outcomes; only
    /// backing store faults are server errors.
    pub fn is_server_error(&self) -> bool {
        matches!(self, UsersError::Store(_))
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            UsersError::InvalidContext => 401,
            UsersError::Validation(_) | UsersError::InvalidQuery(_) => 422,
            UsersError::NotFound => 404,
            UsersError::AlreadyExists => 409,
            UsersError::Store(_) => 500,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            UsersError::InvalidContext => "INVALID_CONTEXT",
            UsersError::Validation(_) => "VALIDATION_ERROR",
            UsersError::NotFound => "NOT_FOUND",
            UsersError::AlreadyExists => "ALREADY_EXISTS",
            UsersError::InvalidQuery(_) => "INVALID_QUERY",
            UsersError::Store(_) => "STORE_ERROR",
        }
    }
}
