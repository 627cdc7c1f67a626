//! Schema-metadata sources consulted when no static rule classifies a model.
//!
//! - `snapshot`: an exported `INFORMATION_SCHEMA.TABLES` listing read from disk
//! - `postgres`: a live `information_schema` query (feature `postgres`)

pub mod snapshot;

#[cfg(feature = "postgres")]
pub mod postgres;

use crate::error::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use snapshot::SnapshotCatalog;

/// Answers "which schema owns this table?".
pub trait SchemaCatalog {
    /// Looks up the schema of `table_name` by exact, case-sensitive match.
    ///
    /// # Returns
    /// * `Ok(Some(schema))` - the table exists
    /// * `Ok(None)` - no such table
    /// * `Err(_)` - the source itself could not be queried
    fn lookup(&self, table_name: &str) -> Result<Option<String>>;
}

impl<T: SchemaCatalog + ?Sized> SchemaCatalog for Box<T> {
    fn lookup(&self, table_name: &str) -> Result<Option<String>> {
        (**self).lookup(table_name)
    }
}

/// Connection parameters for a live catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    #[serde(default = "get_default_port")]
    pub port: u16,
    pub database: String,
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Where schema metadata comes from.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CatalogConfig {
    Snapshot { path: PathBuf },
    Postgres(DatabaseConfig),
}

impl CatalogConfig {
    /// Builds the configured catalog. Relative snapshot paths resolve against `base_dir`.
    pub fn open(&self, base_dir: &Path) -> Result<Box<dyn SchemaCatalog>> {
        match self {
            CatalogConfig::Snapshot { path } => {
                let path = if path.is_absolute() { path.clone() } else { base_dir.join(path) };
                Ok(Box::new(SnapshotCatalog::from_file(&path)?))
            }
            #[cfg(feature = "postgres")]
            CatalogConfig::Postgres(database) => {
                Ok(Box::new(postgres::PostgresCatalog::connect(database)?))
            }
            #[cfg(not(feature = "postgres"))]
            CatalogConfig::Postgres(database) => Err(crate::error::Error::ConfigValidation(format!(
                "catalog '{}' on '{}' requires the `postgres` feature",
                database.database, database.host
            ))),
        }
    }
}

fn get_default_port() -> u16 {
    5432
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_snapshot_config() {
        let config: CatalogConfig =
            serde_yaml::from_str("kind: snapshot\npath: catalog.json\n").unwrap();
        assert!(
            matches!(config, CatalogConfig::Snapshot { ref path } if path == Path::new("catalog.json"))
        );
    }

    #[test]
    fn deserializes_postgres_config_with_default_port() {
        let config: CatalogConfig = serde_json::from_str(
            r#"{"kind": "postgres", "host": "db", "database": "erp", "username": "reader"}"#,
        )
        .unwrap();
        match config {
            CatalogConfig::Postgres(db) => {
                assert_eq!(db.port, 5432);
                assert_eq!(db.password, "");
            }
            other => panic!("unexpected catalog config: {other:?}"),
        }
    }

    #[cfg(not(feature = "postgres"))]
    #[test]
    fn postgres_without_feature_is_a_config_error() {
        let config = CatalogConfig::Postgres(DatabaseConfig {
            host: "db".into(),
            port: 5432,
            database: "erp".into(),
            username: "reader".into(),
            password: String::new(),
        });
        let err = config.open(Path::new(".")).err().unwrap();
        assert!(matches!(err, crate::error::Error::ConfigValidation(_)));
    }
}
