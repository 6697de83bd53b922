//! # Entity Trait
//!
//! The `Entity` trait is the contract every record type (User, Product, ...)
//! implements to be held in a [`Collection`](crate::Collection).
//!
//! Associated types keep payloads apart at compile time: a `User` collection
//! only accepts a `UserCreate`, never a `ProductCreate`.

use chrono::{DateTime, Utc};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be stored in a collection.
///
/// The collection owns identity and creation time. `from_create` receives both
/// and must store them unchanged, so that `item.id()` equals the key the
/// collection files the item under.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The identity type. Built from the collection's `u64` counter.
    type Id: Copy + Eq + Hash + Send + Sync + Display + Debug + From<u64>;

    /// The caller-supplied data for a new record.
    type Create: Send + Debug;

    /// The caller-supplied data for changing an existing record.
    type Update: Send + Debug;

    /// Short lowercase label used in logs and errors (e.g. `"user"`).
    const KIND: &'static str;

    /// Build the full record from its assigned identity, creation time and payload.
    fn from_create(id: Self::Id, params: Self::Create, created_at: DateTime<Utc>) -> Self;

    /// The identity the record was created with.
    fn id(&self) -> Self::Id;

    /// Apply an update payload in place.
    ///
    /// Must not alter the identity or the creation timestamp.
    fn apply_update(&mut self, update: Self::Update);
}
