//! # Observability & Tracing
//!
//! Structured logging for registries and the services built on them.
//!
//! ## What Gets Traced
//!
//! - **Mutations** at `info`: `Created`, `Updated`, `Deleted`, each with the
//!   entity `kind`, the `id` and the collection `size` afterwards.
//! - **Reads** at `debug`: `Get` with `found`, `List` with `count`.
//! - **Rejected input** at `warn`, from the domain clients.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run      # mutations only
//! RUST_LOG=debug cargo run     # reads and payloads as well
//! ```
//!
//! The compact format hides module paths (`with_target(false)`); the `kind`
//! field already says which collection a line is about.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// `filter` uses `RUST_LOG` syntax (e.g. `info`, `catalog=debug`). An
/// unparsable filter falls back to `info`. Call once per process.
pub fn setup_tracing(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
