//! products_postgres: Postgres adapter for the product catalogue.

pub mod database;
pub mod sqlx_types;
pub mod store;

pub use database::{connect, ensure_schema, mask_database_url, DatabaseConfig};
pub use store::PgProductStore;
