//! # Collection
//!
//! An identity-keyed map of records plus the counter that assigns identities.
//!
//! `Collection` does no locking of its own. The owner serializes access, and
//! must hold exclusive access across [`Collection::insert`] so that reading the
//! counter, filing the record and advancing the counter happen as one step.

use crate::entity::Entity;
use crate::error::RegistryError;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// All records of one entity type, keyed by identity.
///
/// # Identity assignment
///
/// `next_id` starts at 1 and is advanced once per insert. Nothing ever moves
/// it backwards: removing the newest record still leaves its identity spent.
#[derive(Debug, Clone)]
pub struct Collection<T: Entity> {
    items: HashMap<T::Id, T>,
    next_id: u64,
}

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Collection<T> {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            next_id: 1,
        }
    }

    /// Assigns the next identity and `created_at`, files the record, and
    /// returns a copy of it.
    pub fn insert(&mut self, params: T::Create, created_at: DateTime<Utc>) -> T {
        let id = T::Id::from(self.next_id);
        self.next_id += 1;

        let item = T::from_create(id, params, created_at);
        debug_assert_eq!(item.id(), id, "entity must keep the identity it was built with");
        self.items.insert(id, item.clone());
        item
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.get(id)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.items.contains_key(id)
    }

    /// First record matching `predicate`, in unspecified order.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.values().find(|item| predicate(item))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    /// Owned copies of every record. Later mutations of the collection do not
    /// show up in the returned vector.
    pub fn snapshot(&self) -> Vec<T> {
        self.items.values().cloned().collect()
    }

    /// Applies `update` to the record with `id` and returns the new state.
    pub fn update(&mut self, id: &T::Id, update: T::Update) -> Result<T, RegistryError> {
        let item = self
            .items
            .get_mut(id)
            .ok_or_else(|| RegistryError::not_found(T::KIND, id))?;
        item.apply_update(update);
        Ok(item.clone())
    }

    /// Removes and returns the record with `id`. The identity stays spent.
    pub fn remove(&mut self, id: &T::Id) -> Result<T, RegistryError> {
        self.items
            .remove(id)
            .ok_or_else(|| RegistryError::not_found(T::KIND, id))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The identity the next insert will receive, as a raw counter value.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}
