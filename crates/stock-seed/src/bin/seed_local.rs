//! Simple seed script - data only, fixed `data.sqlite` target
//!
//! Run with:
//! ```
//! cargo run -p stock-seed --bin seed-local
//! ```

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use stock_seed::{SeedConfig, Seeder};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::local();

    let options = SqliteConnectOptions::new()
        .filename(&config.database_path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    tracing::info!("Connected to database {}", config.database_path.display());

    let result = Seeder::new(pool.clone()).run(&config).await;
    pool.close().await;

    match result {
        Ok(inserted) => {
            tracing::info!("Seed completed!");
            tracing::info!("  Stock items: {inserted}");
            Ok(())
        }
        Err(e) => {
            tracing::error!("An error occurred in database initialization: {e}");
            std::process::exit(1);
        }
    }
}
