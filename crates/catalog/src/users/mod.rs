//! # Users
//!
//! The user resource: the [`Entity`](registry::Entity) implementation for
//! [`User`](crate::model::User), the [`UserError`] type, and the
//! [`UserPage`] returned by
//! [`UserClient::list_users`](crate::clients::UserClient::list_users).
//!
//! ## Usage
//!
//! ```rust
//! use catalog::clients::UserClient;
//! use catalog::model::UserCreate;
//! use catalog::store::CatalogStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = UserClient::new(CatalogStore::new());
//!     let user = client
//!         .create_user(UserCreate::new("alice", "alice@example.com"))
//!         .await?;
//!     assert_eq!(user.id.0, 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;
pub mod listing;

pub use error::*;
pub use listing::*;
