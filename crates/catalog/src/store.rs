//! # Catalog Store
//!
//! The in-memory home of every [`User`] and [`Product`].
//!
//! ## Concurrency Model
//!
//! Both collections and both identity counters sit behind a single
//! `tokio::sync::RwLock`:
//!
//! - **Creates, updates and deletes** take the lock exclusively. For a create,
//!   reading the counter, filing the record and advancing the counter happen
//!   under one guard, so two racing creates can never share an identity.
//! - **Gets and lists** take the lock shared. Any number of readers proceed
//!   together; writers wait for them.
//!
//! Nothing inside the lock awaits anything else, so every operation is one
//! short critical section. Records leave the store as clones: mutating a
//! returned value never touches the stored one.
//!
//! ## Identities
//!
//! Users and products are numbered independently, each starting at 1. Deleting
//! a record does not free its identity.
//!
//! ## Usage
//!
//! ```rust
//! use catalog::model::UserCreate;
//! use catalog::store::CatalogStore;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let store = CatalogStore::new();
//! let admin = store.create_user(UserCreate::new("admin", "admin@example.com")).await;
//! assert_eq!(store.get_user(admin.id).await, Some(admin));
//! # }
//! ```

use crate::model::{Product, User};
use async_trait::async_trait;
use chrono::Utc;
use paste::paste;
use registry::{Collection, Entity, RegistryError, Repository};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

#[derive(Debug, Default)]
struct Tables {
    users: Collection<User>,
    products: Collection<Product>,
}

/// Handle to the shared catalog state. Cloning is cheap and every clone sees
/// the same data.
#[derive(Clone, Default)]
pub struct CatalogStore {
    tables: Arc<RwLock<Tables>>,
}

impl CatalogStore {
    /// Creates an empty store. User and product identities both start at 1.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Generates the per-entity store operations and the matching
/// [`Repository`] implementation.
///
/// `$field` is the `Tables` field, `$one`/`$many` the singular and plural
/// names used in method names (`create_user`, `list_users`, ...).
macro_rules! catalog_table {
    ($entity:ty, $field:ident, $one:ident, $many:ident) => {
        paste! {
            impl CatalogStore {
                #[doc = concat!("Stores a new ", stringify!($one), ", assigning its identity and `created_at`.")]
                pub async fn [<create_ $one>](&self, params: <$entity as Entity>::Create) -> $entity {
                    let kind = <$entity as Entity>::KIND;
                    debug!(kind, ?params, "Create");
                    let mut tables = self.tables.write().await;
                    let item = tables.$field.insert(params, Utc::now());
                    info!(kind, id = %item.id(), size = tables.$field.len(), "Created");
                    item
                }

                #[doc = concat!("Like [`create_", stringify!($one), "`](Self::create_", stringify!($one), "), but first runs `check`")]
                /// against the current collection under the same exclusive guard.
                /// If `check` fails nothing is stored and no identity is consumed.
                pub async fn [<create_ $one _checked>]<E, F>(
                    &self,
                    params: <$entity as Entity>::Create,
                    check: F,
                ) -> Result<$entity, E>
                where
                    F: FnOnce(&Collection<$entity>) -> Result<(), E>,
                {
                    let kind = <$entity as Entity>::KIND;
                    debug!(kind, ?params, "Create (checked)");
                    let mut tables = self.tables.write().await;
                    check(&tables.$field)?;
                    let item = tables.$field.insert(params, Utc::now());
                    info!(kind, id = %item.id(), size = tables.$field.len(), "Created");
                    Ok(item)
                }

                #[doc = concat!("The ", stringify!($one), " with `id`, if it exists.")]
                pub async fn [<get_ $one>](&self, id: <$entity as Entity>::Id) -> Option<$entity> {
                    let kind = <$entity as Entity>::KIND;
                    let tables = self.tables.read().await;
                    let item = tables.$field.get(&id).cloned();
                    debug!(kind, %id, found = item.is_some(), "Get");
                    item
                }

                #[doc = concat!("Snapshot of all ", stringify!($many), " in unspecified order.")]
                pub async fn [<list_ $many>](&self) -> Vec<$entity> {
                    let kind = <$entity as Entity>::KIND;
                    let tables = self.tables.read().await;
                    let items = tables.$field.snapshot();
                    debug!(kind, count = items.len(), "List");
                    items
                }

                #[doc = concat!("Applies `update` to a stored ", stringify!($one), " and returns its new state.")]
                pub async fn [<update_ $one>](
                    &self,
                    id: <$entity as Entity>::Id,
                    update: <$entity as Entity>::Update,
                ) -> Result<$entity, RegistryError> {
                    let kind = <$entity as Entity>::KIND;
                    debug!(kind, %id, ?update, "Update");
                    let mut tables = self.tables.write().await;
                    match tables.$field.update(&id, update) {
                        Ok(item) => {
                            info!(kind, %id, "Updated");
                            Ok(item)
                        }
                        Err(e) => {
                            warn!(kind, %id, "Not found");
                            Err(e)
                        }
                    }
                }

                #[doc = concat!("Removes a ", stringify!($one), " and returns it. Its identity is not reused.")]
                pub async fn [<delete_ $one>](&self, id: <$entity as Entity>::Id) -> Result<$entity, RegistryError> {
                    let kind = <$entity as Entity>::KIND;
                    let mut tables = self.tables.write().await;
                    match tables.$field.remove(&id) {
                        Ok(item) => {
                            info!(kind, %id, size = tables.$field.len(), "Deleted");
                            Ok(item)
                        }
                        Err(e) => {
                            warn!(kind, %id, "Not found");
                            Err(e)
                        }
                    }
                }

                #[doc = concat!("Number of stored ", stringify!($many), ".")]
                pub async fn [<$many _len>](&self) -> usize {
                    self.tables.read().await.$field.len()
                }
            }

            #[async_trait]
            impl Repository<$entity> for CatalogStore {
                async fn create(&self, params: <$entity as Entity>::Create) -> $entity {
                    self.[<create_ $one>](params).await
                }

                async fn get(&self, id: <$entity as Entity>::Id) -> Option<$entity> {
                    self.[<get_ $one>](id).await
                }

                async fn list(&self) -> Vec<$entity> {
                    self.[<list_ $many>]().await
                }

                async fn update(
                    &self,
                    id: <$entity as Entity>::Id,
                    update: <$entity as Entity>::Update,
                ) -> Result<$entity, RegistryError> {
                    self.[<update_ $one>](id, update).await
                }

                async fn delete(&self, id: <$entity as Entity>::Id) -> Result<$entity, RegistryError> {
                    self.[<delete_ $one>](id).await
                }
            }
        }
    };
}

catalog_table!(User, users, user, users);
catalog_table!(Product, products, product, products);
