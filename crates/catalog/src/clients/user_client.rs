//! # User Client
//!
//! Provides a high-level API for user records. It wraps a
//! [`CatalogStore`] and exposes domain-specific methods.
use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::store::CatalogStore;
use crate::paging;
use crate::users::{UserError, UserPage};
use async_trait::async_trait;
use registry::{EntityClient, Repository};
use tracing::{debug, instrument, warn};

/// Client for user operations.
#[derive(Clone)]
pub struct UserClient {
    store: CatalogStore,
}

impl UserClient {
    pub fn new(store: CatalogStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EntityClient<User> for UserClient {
    type Error = UserError;

    fn repository(&self) -> &dyn Repository<User> {
        &self.store
    }
}

impl UserClient {
    /// Registers a new user.
    ///
    /// Username and email must be non-blank and not already taken. The
    /// uniqueness check and the insert run under one store guard, so two
    /// concurrent registrations of the same username cannot both succeed.
    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<User, UserError> {
        if let Err(e) = validate_new_user(&params) {
            warn!(error = %e, "Rejected user");
            return Err(e);
        }

        let username = params.username.clone();
        let email = params.email.clone();
        let result = self
            .store
            .create_user_checked(params, |users| {
                if users.find(|u| u.username == username).is_some() {
                    return Err(UserError::AlreadyExists(format!("username {username}")));
                }
                if users.find(|u| u.email == email).is_some() {
                    return Err(UserError::AlreadyExists(format!("email {email}")));
                }
                Ok(())
            })
            .await;

        if let Err(e) = &result {
            warn!(error = %e, "Rejected user");
        }
        result
    }

    /// Changes the display name and/or active flag of a user.
    #[instrument(skip(self))]
    pub async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<User, UserError> {
        self.store
            .update_user(id, update)
            .await
            .map_err(UserError::from)
    }

    /// One page of users ordered by identity. `page` starts at 1 and `limit`
    /// must lie in `1..=100`; `total` counts every user.
    #[instrument(skip(self))]
    pub async fn list_users(&self, page: u32, limit: u32) -> Result<UserPage, UserError> {
        paging::check_bounds(page, limit).map_err(UserError::Validation)?;
        let page = UserPage::build(self.store.list_users().await, page, limit);
        debug!(total = page.total, returned = page.users.len(), "List page");
        Ok(page)
    }
}

fn validate_new_user(params: &UserCreate) -> Result<(), UserError> {
    if params.username.trim().is_empty() {
        return Err(UserError::Validation("username must not be empty".into()));
    }
    if params.email.trim().is_empty() {
        return Err(UserError::Validation("email must not be empty".into()));
    }
    Ok(())
}
