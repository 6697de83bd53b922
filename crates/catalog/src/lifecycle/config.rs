//! Environment-driven settings for the catalog binary.

use thiserror::Error;

pub const LOG_FILTER_VAR: &str = "RUST_LOG";
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
pub const SEED_DEMO_DATA_VAR: &str = "CATALOG_SEED_DEMO_DATA";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Runtime settings. The store itself takes none; these only shape the process
/// around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Tracing filter in `RUST_LOG` syntax.
    pub log_filter: String,
    /// Whether [`CatalogSystem::start`](super::CatalogSystem::start) seeds demo records.
    pub seed_demo_data: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            seed_demo_data: true,
        }
    }
}

impl CatalogConfig {
    /// Reads `RUST_LOG` (or `LOG_LEVEL`) and `CATALOG_SEED_DEMO_DATA`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let log_filter = read(LOG_FILTER_VAR)
            .or_else(|| read(LOG_LEVEL_VAR))
            .unwrap_or(defaults.log_filter);

        let seed_demo_data = match read(SEED_DEMO_DATA_VAR) {
            Some(raw) => parse_flag(SEED_DEMO_DATA_VAR, &raw)?,
            None => defaults.seed_demo_data,
        };

        Ok(Self {
            log_filter,
            seed_demo_data,
        })
    }
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
        }),
    }
}
