//! Pure data structures (records, identities and payloads) for the catalog.

pub mod product;
pub mod user;

pub use product::*;
pub use user::*;

/// Serde default for `is_active` on create payloads.
pub(crate) fn default_active() -> bool {
    true
}
