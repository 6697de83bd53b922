//! # Repository Trait
//!
//! The async interface a store offers for one entity type. Domain clients are
//! written against `dyn Repository<T>` rather than a concrete store.

use crate::entity::Entity;
use crate::error::RegistryError;
use async_trait::async_trait;

/// Create/read/update/delete access to the records of one entity type.
///
/// Implementations must make `create` atomic: two concurrent calls never
/// observe the same identity. `get` and `list` hand back owned copies.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Assign identity and creation time, store the record, return it.
    async fn create(&self, params: T::Create) -> T;

    /// The record with `id`, if any. A miss is not an error.
    async fn get(&self, id: T::Id) -> Option<T>;

    /// Every current record, in unspecified order.
    async fn list(&self) -> Vec<T>;

    async fn update(&self, id: T::Id, update: T::Update) -> Result<T, RegistryError>;

    async fn delete(&self, id: T::Id) -> Result<T, RegistryError>;
}
