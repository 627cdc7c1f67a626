use crate::catalog::{DatabaseConfig, SchemaCatalog};
use crate::error::{Error, Result};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tokio::runtime::{Builder, Runtime};

const SCHEMA_QUERY: &str = "SELECT table_schema::text FROM information_schema.tables \
     WHERE table_name = $1 ORDER BY table_schema LIMIT 1";

/// Live catalog over `information_schema.tables`.
///
/// Lookups are blocking: the pool runs on a private current-thread runtime.
pub struct PostgresCatalog {
    runtime: Runtime,
    pool: PgPool,
}

impl PostgresCatalog {
    pub fn connect(config: &DatabaseConfig) -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .database(&config.database)
            .username(&config.username)
            .password(&config.password);

        log::debug!(
            "Connecting to schema catalog {}@{}:{}/{}",
            config.username,
            config.host,
            config.port,
            config.database
        );
        let pool = runtime
            .block_on(PgPoolOptions::new().max_connections(1).connect_with(options))
            .map_err(|e| Error::CatalogError {
                name: config.database.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self { runtime, pool })
    }
}

impl SchemaCatalog for PostgresCatalog {
    fn lookup(&self, table_name: &str) -> Result<Option<String>> {
        let row: Option<(String,)> = self.runtime.block_on(
            sqlx::query_as(SCHEMA_QUERY).bind(table_name).fetch_optional(&self.pool),
        )?;
        Ok(row.map(|(schema,)| schema))
    }
}
