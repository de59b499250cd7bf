//! Core error types for the user directory
use thiserror::Error;

use crate::types::UserId;

/// Result type alias using `DirectoryError`
pub type Result<T> = std::result::Result<T, DirectoryError>;

/// Core error type for directory construction and lookups
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// No user carries the requested identifier
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// Two seed records share an identifier
    #[error("Duplicate user id: {0}")]
    DuplicateId(UserId),

    /// A seed record violates a field constraint
    #[error("Invalid user record: {0}")]
    InvalidRecord(String),
}

impl DirectoryError {
    /// Create an invalid record error
    pub fn invalid_record(msg: impl Into<String>) -> Self {
        Self::InvalidRecord(msg.into())
    }

    /// Whether this error means the requested user does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_))
    }
}
