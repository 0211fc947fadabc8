//! Configuration for seeding runs.

use std::env;
use std::path::PathBuf;

use crate::error::SeedError;

/// Fixed name of the inventory input file.
pub const STOCK_FILE: &str = "stock.json";

/// Fixed path of the schema script applied by the strict variant.
pub const SCHEMA_FILE: &str = "migrations/0001_init.sql";

/// Database file used when no target is configured.
pub const DEFAULT_DATABASE: &str = "data.sqlite";

const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Configuration for one seeding run.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Path to the SQLite database file to seed.
    pub database_path: PathBuf,

    /// Path to the JSON inventory file.
    pub stock_file: PathBuf,

    /// Schema script to apply before inserting, if any.
    pub schema_file: Option<PathBuf>,
}

impl SeedConfig {
    /// Strict configuration: the database path comes from `DATABASE_URL`,
    /// and the schema script is applied before any data is inserted.
    ///
    /// Fails before any file or database I/O when the variable is unset.
    pub fn from_env() -> Result<Self, SeedError> {
        Self::strict(env::var(DATABASE_URL_VAR).ok())
    }

    /// Builds the strict configuration from an already-resolved database path.
    pub fn strict(database_url: Option<String>) -> Result<Self, SeedError> {
        let database_path = database_url.ok_or(SeedError::MissingEnv(DATABASE_URL_VAR))?;

        Ok(Self {
            database_path: PathBuf::from(database_path),
            stock_file: PathBuf::from(STOCK_FILE),
            schema_file: Some(PathBuf::from(SCHEMA_FILE)),
        })
    }

    /// Simple configuration: fixed `data.sqlite` target, no schema step.
    pub fn local() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE),
            stock_file: PathBuf::from(STOCK_FILE),
            schema_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_requires_database_url() {
        let err = SeedConfig::strict(None).unwrap_err();
        assert!(matches!(err, SeedError::MissingEnv("DATABASE_URL")));
    }

    #[test]
    fn strict_applies_schema() {
        let config = SeedConfig::strict(Some("shop.sqlite".to_string())).unwrap();

        assert_eq!(config.database_path, PathBuf::from("shop.sqlite"));
        assert_eq!(config.stock_file, PathBuf::from("stock.json"));
        assert_eq!(config.schema_file, Some(PathBuf::from(SCHEMA_FILE)));
    }

    #[test]
    fn local_skips_schema() {
        let config = SeedConfig::local();

        assert_eq!(config.database_path, PathBuf::from("data.sqlite"));
        assert!(config.schema_file.is_none());
    }
}
