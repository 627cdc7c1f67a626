use crate::catalog::SchemaCatalog;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// One row of an `INFORMATION_SCHEMA.TABLES` export.
#[derive(Debug, Deserialize)]
pub struct TableRow {
    #[serde(alias = "TABLE_SCHEMA", alias = "table_schema")]
    pub schema: String,
    #[serde(alias = "TABLE_NAME", alias = "table_name")]
    pub table: String,
}

/// Catalog backed by an exported table listing.
///
/// The first row seen for a table name wins, mirroring a `SELECT ... FETCH FIRST`
/// against the live catalog.
#[derive(Debug, Default)]
pub struct SnapshotCatalog {
    tables: IndexMap<String, String>,
}

impl SnapshotCatalog {
    pub fn from_rows<I: IntoIterator<Item = TableRow>>(rows: I) -> Self {
        let mut tables = IndexMap::new();
        for row in rows {
            tables.entry(row.table).or_insert(row.schema);
        }
        Self { tables }
    }

    /// Reads a JSON (`.json`) or YAML (anything else) export.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::CatalogError {
            name: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let rows: Vec<TableRow> = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            _ => serde_yaml::from_str(&content)?,
        };
        log::debug!("Loaded {} catalog rows from {}", rows.len(), path.display());
        Ok(Self::from_rows(rows))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl SchemaCatalog for SnapshotCatalog {
    fn lookup(&self, table_name: &str) -> Result<Option<String>> {
        Ok(self.tables.get(table_name).cloned())
    }
}
