//! Type-safe clients over the [`CatalogStore`](crate::store::CatalogStore).
//!
//! Clients hold the rules that sit in front of the store: input validation,
//! uniqueness of usernames and emails, and product search. Reads and deletes
//! come from [`EntityClient`](registry::EntityClient).

pub mod product_client;
pub mod user_client;

pub use product_client::*;
pub use user_client::*;
