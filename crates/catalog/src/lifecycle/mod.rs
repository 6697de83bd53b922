//! # System Lifecycle
//!
//! Wiring for a running catalog: configuration, construction of the shared
//! store and its clients, optional demo data, and shutdown reporting.
//!
//! ## The CatalogSystem Pattern
//!
//! ```rust,ignore
//! let config = CatalogConfig::from_env()?;
//! registry::telemetry::setup_tracing(&config.log_filter);
//!
//! let system = CatalogSystem::start(&config).await?;
//! let users = system.user_client.list().await;
//! system.shutdown().await;
//! ```
//!
//! The store is built exactly once per system and handed to each client; the
//! clients share it by cloning the handle. There is no global instance, so
//! tests can build as many independent systems as they like.

pub mod catalog_system;
pub mod config;

pub use catalog_system::*;
pub use config::*;
