//! # Registry Errors
//!
//! Lookups that may legitimately miss return `Option`. Operations that need an
//! existing record to act on (update, delete) report a miss as
//! [`RegistryError::NotFound`].

/// Errors produced by registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
}

impl RegistryError {
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        RegistryError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}
