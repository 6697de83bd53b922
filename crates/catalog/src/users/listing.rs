//! Paged user listings.

use crate::model::User;
use crate::paging;
use serde::{Deserialize, Serialize};

/// One page of users, in ascending identity order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPage {
    pub users: Vec<User>,
    /// Number of users before pagination.
    pub total: usize,
    pub page: u32,
    pub limit: u32,
}

impl UserPage {
    /// Orders `users` by identity and cuts out the requested page. Bounds are
    /// checked by the caller.
    pub fn build(mut users: Vec<User>, page: u32, limit: u32) -> Self {
        users.sort_by_key(|u| u.id);
        let total = users.len();
        Self {
            users: paging::slice(users, page, limit),
            total,
            page,
            limit,
        }
    }
}
