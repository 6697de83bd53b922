//! Error types for user operations.

use registry::RegistryError;
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("User not found: {0}")]
    NotFound(String),

    /// A user with the same username or email already exists.
    #[error("User already exists: {0}")]
    AlreadyExists(String),

    /// The user data provided is invalid.
    #[error("User validation error: {0}")]
    Validation(String),
}

impl From<RegistryError> for UserError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::NotFound { id, .. } => UserError::NotFound(id),
        }
    }
}
