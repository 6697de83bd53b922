//! # EntityClient Trait
//!
//! Provides a common interface for resource-specific clients, adding default
//! `get`, `require`, `list` and `delete` methods on top of a [`Repository`].

use crate::entity::Entity;
use crate::error::RegistryError;
use crate::repository::Repository;
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read/delete operations.
///
/// Implementors supply the repository and an error type that registry errors
/// convert into; create and update stay on the concrete client, where the
/// resource's validation rules live.
#[async_trait]
pub trait EntityClient<T: Entity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<RegistryError> + Send + Sync;

    /// Access the underlying repository.
    fn repository(&self) -> &dyn Repository<T>;

    /// Fetch a record by identity.
    #[tracing::instrument(skip(self), fields(kind = T::KIND))]
    async fn get(&self, id: T::Id) -> Option<T> {
        tracing::debug!("Sending request");
        self.repository().get(id).await
    }

    /// Fetch a record by identity, treating a miss as an error.
    async fn require(&self, id: T::Id) -> Result<T, Self::Error> {
        self.get(id)
            .await
            .ok_or_else(|| RegistryError::not_found(T::KIND, id).into())
    }

    /// Snapshot of every record.
    #[tracing::instrument(skip(self), fields(kind = T::KIND))]
    async fn list(&self) -> Vec<T> {
        tracing::debug!("Sending request");
        self.repository().list().await
    }

    /// Remove a record by identity and return it.
    #[tracing::instrument(skip(self), fields(kind = T::KIND))]
    async fn delete(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.repository().delete(id).await.map_err(Self::Error::from)
    }
}
