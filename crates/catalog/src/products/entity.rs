//! Entity trait implementation for the Product record type.

use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use chrono::{DateTime, Utc};
use registry::Entity;

impl Entity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    const KIND: &'static str = "product";

    fn from_create(id: ProductId, params: ProductCreate, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: params.name,
            description: params.description,
            price: params.price,
            stock: params.stock,
            category: params.category,
            is_active: params.is_active,
            created_at,
        }
    }

    fn id(&self) -> ProductId {
        self.id
    }

    fn apply_update(&mut self, update: ProductUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
    }
}
