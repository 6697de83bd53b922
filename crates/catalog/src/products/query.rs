//! Filtering and pagination for product listings.

use super::ProductError;
use crate::model::Product;
use crate::paging;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use crate::paging::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT};

/// Search parameters for products.
///
/// All filters are optional and combine with AND. `category` matches exactly;
/// `search` matches case-insensitively anywhere in the name or description;
/// price bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductQuery {
    pub page: u32,
    pub limit: u32,
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub search: Option<String>,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            category: None,
            min_price: None,
            max_price: None,
            search: None,
        }
    }
}

impl ProductQuery {
    pub fn with_page(mut self, page: u32, limit: u32) -> Self {
        self.page = page;
        self.limit = limit;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_price_range(mut self, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Checks page/limit bounds and that the price range is not inverted.
    pub fn validate(&self) -> Result<(), ProductError> {
        paging::check_bounds(self.page, self.limit).map_err(ProductError::InvalidQuery)?;
        for (label, bound) in [("min_price", self.min_price), ("max_price", self.max_price)] {
            if bound.is_some_and(|p| p < Decimal::ZERO) {
                return Err(ProductError::InvalidQuery(format!("{label} must not be negative")));
            }
        }
        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            if min > max {
                return Err(ProductError::InvalidQuery(format!(
                    "min_price {min} is greater than max_price {max}"
                )));
            }
        }
        Ok(())
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if &product.category != category {
                return false;
            }
        }
        if self.min_price.is_some_and(|min| product.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| product.price > max) {
            return false;
        }
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let hit = product.name.to_lowercase().contains(&term)
                || product.description.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }
        true
    }

    /// Filters `products`, orders them newest first and cuts out the
    /// requested page. Records created in the same instant fall back to
    /// descending identity.
    ///
    /// Assumes the query has already passed [`ProductQuery::validate`].
    pub fn apply(&self, products: Vec<Product>) -> ProductPage {
        let mut matched: Vec<Product> = products.into_iter().filter(|p| self.matches(p)).collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let total = matched.len();
        ProductPage {
            products: paging::slice(matched, self.page, self.limit),
            total,
            page: self.page,
            limit: self.limit,
        }
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    /// Number of matches before pagination.
    pub total: usize,
    pub page: u32,
    pub limit: u32,
}
