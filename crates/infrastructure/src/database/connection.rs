use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use sea_orm::{DatabaseConnection, SqlxSqliteConnector};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

/// One SQLite pool shared by both relational backends.
///
/// The sea-orm connection wraps the same pool, so rows written through one
/// backend are visible to the other.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
    connection: DatabaseConnection,
}

impl Database {
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            // An in-memory database disappears with its last connection
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        info!(url, max_connections, "Connected to SQLite");
        Ok(Self::from_pool(pool))
    }

    /// Private in-memory database with the schema applied
    pub async fn in_memory() -> Result<Self> {
        let database = Self::connect("sqlite::memory:", 1).await?;
        database.migrate().await?;
        Ok(database)
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        let connection = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool.clone());
        Self { pool, connection }
    }

    pub async fn migrate(&self) -> Result<()> {
        Migrator::up(&self.connection, None).await?;
        info!("Database schema is up to date");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }
}
