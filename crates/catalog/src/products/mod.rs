//! # Products
//!
//! The product resource: the [`Entity`](registry::Entity) implementation for
//! [`Product`](crate::model::Product), the [`ProductError`] type, and the
//! [`ProductQuery`] used by
//! [`ProductClient::search_products`](crate::clients::ProductClient::search_products).
//!
//! ## Usage
//!
//! ```rust
//! use catalog::clients::ProductClient;
//! use catalog::model::ProductCreate;
//! use catalog::products::ProductQuery;
//! use catalog::store::CatalogStore;
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ProductClient::new(CatalogStore::new());
//!     let widget = ProductCreate::new("Widget", Decimal::new(2999, 2))
//!         .with_category("tools")
//!         .with_stock(100);
//!     client.create_product(widget).await?;
//!
//!     let page = client
//!         .search_products(ProductQuery::default().with_category("tools"))
//!         .await?;
//!     assert_eq!(page.total, 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;
pub mod query;

pub use error::*;
pub use query::*;
