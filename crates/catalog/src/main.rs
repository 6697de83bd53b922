//! # Catalog Demo
//!
//! Starts a [`CatalogSystem`], registers a user and a few products from
//! concurrent tasks, and logs what the store hands back.

use catalog::lifecycle::{CatalogConfig, CatalogSystem, SystemError};
use catalog::model::{ProductCreate, UserCreate, UserId};
use catalog::products::ProductQuery;
use registry::telemetry::setup_tracing;
use registry::EntityClient;
use rust_decimal::Decimal;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    let config = CatalogConfig::from_env()?;
    setup_tracing(&config.log_filter);

    info!(seed_demo_data = config.seed_demo_data, "Starting catalog");
    let system = CatalogSystem::start(&config).await?;

    let span = tracing::info_span!("user_registration");
    let user = async {
        info!("Registering user");
        system
            .user_client
            .create_user(UserCreate::new("alice", "alice@example.com").with_full_name("Alice"))
            .await
    }
    .instrument(span)
    .await?;
    info!(user_id = %user.id, username = %user.username, "User registered");

    // A second registration with the same username is refused.
    if let Err(e) = system
        .user_client
        .create_user(UserCreate::new("alice", "other@example.com"))
        .await
    {
        info!(error = %e, "Duplicate registration refused");
    }

    let users = system.user_client.list_users(1, 10).await?;
    info!(total = users.total, "Registered users");

    let span = tracing::info_span!("product_intake");
    let intake = async {
        let mut handles = Vec::new();
        for (name, cents, category) in [
            ("Mechanical Keyboard", 8900, "hardware"),
            ("Trackball", 4500, "hardware"),
            ("Async Rust", 3999, "books"),
        ] {
            let client = system.product_client.clone();
            let params = ProductCreate::new(name, Decimal::new(cents, 2))
                .with_category(category)
                .with_stock(25);
            handles.push(tokio::spawn(async move { client.create_product(params).await }));
        }
        for handle in handles {
            match handle.await {
                Ok(Ok(product)) => info!(product_id = %product.id, name = %product.name, "Product added"),
                Ok(Err(e)) => error!(error = %e, "Product rejected"),
                Err(e) => error!(error = %e, "Intake task failed"),
            }
        }
    };
    intake.instrument(span).await;

    let hardware = system
        .product_client
        .search_products(ProductQuery::default().with_category("hardware"))
        .await?;
    info!(total = hardware.total, "Hardware products");

    match system.user_client.get(UserId(999)).await {
        Some(u) => info!(user_id = %u.id, "Unexpected user"),
        None => info!("No user with id 999"),
    }

    system.shutdown().await;
    info!("Catalog demo finished");
    Ok(())
}
