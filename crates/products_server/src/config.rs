//! Server configuration, from flags or the environment.

use std::net::SocketAddr;
use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};
use products_postgres::DatabaseConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    /// PostgreSQL via sqlx
    Postgres,
    /// Process-local map, lost on shutdown
    Memory,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "products_server", about = "Product catalogue REST service")]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    #[arg(long, env = "PRODUCTS_BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind_addr: SocketAddr,

    /// Storage backend
    #[arg(long, env = "PRODUCTS_STORAGE", value_enum, default_value_t = StorageBackend::Postgres)]
    pub storage: StorageBackend,

    /// PostgreSQL connection string
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "postgresql://localhost:5432/products"
    )]
    pub database_url: String,

    #[arg(long, env = "PRODUCTS_DB_MAX_CONNECTIONS", default_value_t = 10)]
    pub max_connections: u32,

    #[arg(long, env = "PRODUCTS_DB_CONNECT_TIMEOUT_SECS", default_value_t = 30)]
    pub connect_timeout_secs: u64,

    /// Create the products table on startup when missing
    #[arg(
        long,
        env = "PRODUCTS_INIT_SCHEMA",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub init_schema: bool,
}

impl ServerConfig {
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            max_connections: self.max_connections,
            connection_timeout: Duration::from_secs(self.connect_timeout_secs),
            ..DatabaseConfig::new(self.database_url.clone())
        }
    }
}
