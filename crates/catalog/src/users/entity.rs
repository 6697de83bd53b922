//! Entity trait implementation for the User record type.

use crate::model::{User, UserCreate, UserId, UserUpdate};
use chrono::{DateTime, Utc};
use registry::Entity;

impl Entity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    const KIND: &'static str = "user";

    fn from_create(id: UserId, params: UserCreate, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            username: params.username,
            email: params.email,
            full_name: params.full_name,
            is_active: params.is_active,
            created_at,
        }
    }

    fn id(&self) -> UserId {
        self.id
    }

    /// Handles updates to the User record.
    ///
    /// # Fields Updated
    /// - `full_name`: display name
    /// - `is_active`: account flag
    fn apply_update(&mut self, update: UserUpdate) {
        if let Some(full_name) = update.full_name {
            self.full_name = full_name;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
    }
}
