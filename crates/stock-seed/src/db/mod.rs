//! Database integration for seeding the stock table.
//!
//! The [`Seeder`] runs the whole seeding pass as a single transaction:
//! optional schema script, then one insert per stock item, committed together.

mod seeder;

pub use seeder::Seeder;
