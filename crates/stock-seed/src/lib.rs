//! One-shot database seeding for the shop's stock table.
//!
//! Reads a static inventory description from `stock.json` and inserts each
//! record into the `stock` table of a local SQLite database, all inside one
//! transaction. The strict variant (`seed`) also applies the schema script
//! first and takes its database path from `DATABASE_URL`; the simple variant
//! (`seed-local`) targets a fixed `data.sqlite` with no schema step.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use stock_seed::{SeedConfig, Seeder};
//!
//! let config = SeedConfig::from_env()?;
//! let inserted = Seeder::new(pool).run(&config).await?;
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod stock;

pub use config::SeedConfig;
pub use db::Seeder;
pub use error::SeedError;
pub use stock::StockItem;
