//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;

use catalog_db::{DbConfig, MissingRowPolicy};

/// Id the demo updates when `CATALOG_UPDATE_ID` is unset.
pub const DEFAULT_UPDATE_ID: &str = "f66e6516-ee49-44e9-a0cb-883599d9dd9e";

/// Id the demo deletes when `CATALOG_DELETE_ID` is unset.
pub const DEFAULT_DELETE_ID: &str = "11ccfeaf-e21f-4a9d-a324-8b6173a6455d";

/// Catalog CLI configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Connection string handed to the driver
    pub database_url: String,

    /// Product id the demo renames
    pub update_id: String,

    /// Product id the demo deletes
    pub delete_id: String,

    /// Apply embedded migrations on connect
    pub run_migrations: bool,

    /// Report update/delete of unknown ids as errors
    pub strict_writes: bool,
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let string_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let bool_or = |key: &str, default: bool| -> Result<bool, ConfigError> {
            match lookup(key) {
                Some(value) => value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue(key.to_string())),
                None => Ok(default),
            }
        };

        Ok(CatalogConfig {
            database_url: string_or("DATABASE_URL", "sqlite://catalog.db"),
            update_id: string_or("CATALOG_UPDATE_ID", DEFAULT_UPDATE_ID),
            delete_id: string_or("CATALOG_DELETE_ID", DEFAULT_DELETE_ID),
            run_migrations: bool_or("CATALOG_RUN_MIGRATIONS", true)?,
            strict_writes: bool_or("CATALOG_STRICT_WRITES", false)?,
        })
    }

    /// Database settings for a single sequential connection.
    pub fn db_config(&self) -> DbConfig {
        let policy = if self.strict_writes {
            MissingRowPolicy::NotFound
        } else {
            MissingRowPolicy::Ignore
        };

        DbConfig::new(&self.database_url)
            .max_connections(1)
            .run_migrations(self.run_migrations)
            .missing_row_policy(policy)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
