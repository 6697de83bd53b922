//! # Registry
//!
//! Building blocks for in-memory entity registries: identity-keyed collections
//! with store-assigned, monotonically increasing identities.
//!
//! ## Layers
//!
//! - [`Entity`] describes a record type: its identity, its create and update
//!   payloads, and how to build a record from a payload.
//! - [`Collection`] holds the records of one entity type together with the
//!   identity counter. It is plain data; whoever owns it decides how access is
//!   synchronized (typically one `RwLock` around every collection of a store).
//! - [`Repository`] is the async seam that stores implement per entity type.
//! - [`EntityClient`] gives domain clients `get`, `require`, `list` and
//!   `delete` for free on top of a [`Repository`].
//!
//! ## Identity rules
//!
//! - The first identity handed out is `1`.
//! - Every create consumes exactly one identity.
//! - Removing a record never rewinds the counter, so identities are never
//!   reused for the lifetime of a collection.
//!
//! ## Observability
//!
//! Call [`telemetry::setup_tracing`] once at startup. Filtering follows
//! `RUST_LOG` conventions.

pub mod client_trait;
pub mod collection;
pub mod entity;
pub mod error;
pub mod repository;
pub mod telemetry;

pub use client_trait::EntityClient;
pub use collection::Collection;
pub use entity::Entity;
pub use error::RegistryError;
pub use repository::Repository;
