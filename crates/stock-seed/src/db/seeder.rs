//! Transactional seeding of the stock table.

use std::path::Path;

use sqlx::{SqliteConnection, SqlitePool};
use tracing::info;

use crate::config::SeedConfig;
use crate::error::SeedError;
use crate::stock::{self, StockItem};

/// Seeds the stock table from a configured inventory file.
pub struct Seeder {
    pool: SqlitePool,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Runs one seeding pass as a single transaction.
    ///
    /// Applies the schema script when configured, then inserts every item
    /// from the stock file in array order. Any failure aborts the
    /// transaction, so schema creation and all prior inserts are rolled
    /// back together. Returns the number of items inserted.
    pub async fn run(&self, config: &SeedConfig) -> Result<usize, SeedError> {
        let mut tx = self.pool.begin().await?;

        if let Some(schema_file) = &config.schema_file {
            Self::apply_schema(&mut *tx, schema_file).await?;
        }

        let items = stock::load_file(&config.stock_file)?;
        info!("Seeding {} stock items...", items.len());

        Self::insert_items(&mut *tx, &items).await?;

        tx.commit().await?;

        info!("Seeded {} stock items", items.len());
        Ok(items.len())
    }

    /// Executes the schema script verbatim on the open transaction.
    async fn apply_schema(conn: &mut SqliteConnection, path: &Path) -> Result<(), SeedError> {
        info!("Applying schema script {}", path.display());

        let sql = std::fs::read_to_string(path).map_err(|source| SeedError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        // raw_sql so multi-statement scripts run as written
        sqlx::raw_sql(&sql).execute(&mut *conn).await?;

        Ok(())
    }

    /// Inserts items one statement at a time, preserving input order.
    async fn insert_items(
        conn: &mut SqliteConnection,
        items: &[StockItem],
    ) -> Result<(), SeedError> {
        for item in items {
            sqlx::query(
                r#"
                INSERT INTO stock (title, kind, description, quantity)
                VALUES (?1, ?2, ?3, ?4)
                "#,
            )
            .bind(&item.title)
            .bind(&item.kind)
            .bind(&item.description)
            .bind(item.quantity)
            .execute(&mut *conn)
            .await?;
        }

        Ok(())
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
