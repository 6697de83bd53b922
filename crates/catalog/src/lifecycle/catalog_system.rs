use crate::clients::{ProductClient, UserClient};
use crate::lifecycle::config::{CatalogConfig, ConfigError};
use crate::model::{Product, ProductCreate, User, UserCreate};
use crate::products::ProductError;
use crate::store::CatalogStore;
use crate::users::UserError;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::info;

/// Errors surfaced while starting or driving a [`CatalogSystem`].
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Product(#[from] ProductError),
}

/// One running catalog: the shared store and the clients wired to it.
///
/// # Example
///
/// ```rust
/// use catalog::lifecycle::{CatalogConfig, CatalogSystem};
/// use registry::EntityClient;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), catalog::lifecycle::SystemError> {
/// let system = CatalogSystem::start(&CatalogConfig::default()).await?;
/// assert_eq!(system.user_client.list().await.len(), 1);
/// system.shutdown().await;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CatalogSystem {
    /// The store every client below shares.
    pub store: CatalogStore,

    /// Client for user records.
    pub user_client: UserClient,

    /// Client for product records.
    pub product_client: ProductClient,
}

impl Default for CatalogSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSystem {
    /// Builds an empty system: one store, one client per resource.
    pub fn new() -> Self {
        let store = CatalogStore::new();
        Self {
            user_client: UserClient::new(store.clone()),
            product_client: ProductClient::new(store.clone()),
            store,
        }
    }

    /// Builds a system and, if configured, seeds the demo records.
    pub async fn start(config: &CatalogConfig) -> Result<Self, SystemError> {
        let system = Self::new();
        if config.seed_demo_data {
            system.seed_demo_data().await?;
        }
        info!(
            users = system.store.users_len().await,
            products = system.store.products_len().await,
            "Catalog started"
        );
        Ok(system)
    }

    /// Inserts an administrator and one sample product through the regular
    /// create path, so they get identities like any other record.
    pub async fn seed_demo_data(&self) -> Result<(User, Product), SystemError> {
        let admin = self
            .user_client
            .create_user(
                UserCreate::new("admin", "admin@example.com").with_full_name("System Administrator"),
            )
            .await?;

        let guide = self
            .product_client
            .create_product(
                ProductCreate::new("Rust Field Guide", Decimal::new(9999, 2))
                    .with_description("A practical handbook from first steps to production")
                    .with_stock(100)
                    .with_category("books"),
            )
            .await?;

        info!(user_id = %admin.id, product_id = %guide.id, "Seeded demo data");
        Ok((admin, guide))
    }

    /// Logs the final record counts and releases the system.
    ///
    /// State is volatile: once the last clone of the store is dropped, every
    /// record is gone.
    pub async fn shutdown(self) {
        info!(
            users = self.store.users_len().await,
            products = self.store.products_len().await,
            "Shutdown"
        );
    }
}
