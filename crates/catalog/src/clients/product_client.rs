//! # Product Client
//!
//! Provides a high-level API for product records. It wraps a
//! [`CatalogStore`] and exposes domain-specific methods.
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::products::{ProductError, ProductPage, ProductQuery};
use crate::store::CatalogStore;
use async_trait::async_trait;
use registry::{EntityClient, Repository};
use rust_decimal::Decimal;
use tracing::{debug, instrument, warn};

/// Client for product operations.
#[derive(Clone)]
pub struct ProductClient {
    store: CatalogStore,
}

impl ProductClient {
    pub fn new(store: CatalogStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EntityClient<Product> for ProductClient {
    type Error = ProductError;

    fn repository(&self) -> &dyn Repository<Product> {
        &self.store
    }
}

impl ProductClient {
    /// Adds a product. The name must be non-blank and the price positive.
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        if let Err(e) = validate_name(&params.name).and_then(|_| validate_price(params.price)) {
            warn!(error = %e, "Rejected product");
            return Err(e);
        }
        Ok(self.store.create_product(params).await)
    }

    /// Changes the supplied fields of a product.
    ///
    /// A blank name, description or category leaves that field unchanged. A
    /// supplied price may be zero but not negative.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        mut update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        if let Some(price) = update.price.filter(|p| *p < Decimal::ZERO) {
            let e = ProductError::Validation(format!("price must not be negative, got {price}"));
            warn!(%id, error = %e, "Rejected product update");
            return Err(e);
        }
        update.name = update.name.filter(|n| !n.trim().is_empty());
        update.description = update.description.filter(|d| !d.is_empty());
        update.category = update.category.filter(|c| !c.is_empty());

        self.store
            .update_product(id, update)
            .await
            .map_err(ProductError::from)
    }

    /// Filters, orders newest first and paginates the current products.
    #[instrument(skip(self))]
    pub async fn search_products(&self, query: ProductQuery) -> Result<ProductPage, ProductError> {
        query.validate()?;
        let page = query.apply(self.store.list_products().await);
        debug!(total = page.total, returned = page.products.len(), "Search");
        Ok(page)
    }
}

fn validate_name(name: &str) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::Validation("name must not be empty".into()));
    }
    Ok(())
}

fn validate_price(price: Decimal) -> Result<(), ProductError> {
    if price <= Decimal::ZERO {
        return Err(ProductError::Validation(format!(
            "price must be positive, got {price}"
        )));
    }
    Ok(())
}
