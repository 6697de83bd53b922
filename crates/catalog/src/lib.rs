//! # Catalog
//!
//! An in-memory registry of users and products with store-assigned identities,
//! safe for any number of concurrent callers.
//!
//! ## Module Tour
//!
//! - [`model`]: the records ([`User`](model::User), [`Product`](model::Product)),
//!   their identity newtypes and create/update payloads.
//! - [`store`]: [`CatalogStore`](store::CatalogStore), both collections behind
//!   one reader/writer lock.
//! - [`users`], [`products`]: entity implementations and per-resource errors,
//!   plus product search parameters and the user page type.
//! - [`paging`]: page/limit bounds shared by the paged listings.
//! - [`clients`]: validation and uniqueness rules in front of the store.
//! - [`lifecycle`]: configuration and the [`CatalogSystem`](lifecycle::CatalogSystem)
//!   that wires everything together.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run -p catalog
//! CATALOG_SEED_DEMO_DATA=false RUST_LOG=debug cargo run -p catalog
//! ```

pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod paging;
pub mod products;
pub mod store;
pub mod users;
