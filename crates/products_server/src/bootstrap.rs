//! Wires the configured store into a [`ProductService`].

use std::sync::Arc;

use products_core::{InMemoryProductStore, ProductService, ProductServiceImpl, ProductStore};
use products_postgres::{connect, ensure_schema, PgProductStore};
use tracing::{info, warn};

use crate::config::{ServerConfig, StorageBackend};

pub async fn build_service(config: &ServerConfig) -> anyhow::Result<Arc<dyn ProductService>> {
    let store: Arc<dyn ProductStore> = match config.storage {
        StorageBackend::Memory => {
            warn!("Using in-memory storage; products are lost on shutdown");
            Arc::new(InMemoryProductStore::new())
        }
        StorageBackend::Postgres => {
            let pool = connect(&config.database_config()).await?;
            if config.init_schema {
                ensure_schema(&pool).await?;
            } else {
                info!("Skipping schema bootstrap");
            }
            Arc::new(PgProductStore::new(pool))
        }
    };
    Ok(Arc::new(ProductServiceImpl::new(store)))
}
