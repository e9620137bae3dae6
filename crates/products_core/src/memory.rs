//! Process-local product store.
//!
//! Backs the test suites and the `memory` storage mode of the server. Rows
//! live in a `BTreeMap`, so the natural order is ascending identifier.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use anyhow::anyhow;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::ProductError;
use crate::ports::{ProductStore, Result};
use crate::types::{Category, Product, ProductId};

pub struct InMemoryProductStore {
    rows: RwLock<BTreeMap<ProductId, Product>>,
    next_id: AtomicI64,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_all(&self) -> Result<Vec<Product>> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn find_by_category(&self, category: Category) -> Result<Vec<Product>> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    async fn save(&self, mut product: Product) -> Result<Product> {
        let mut rows = self.rows.write().await;
        match product.id {
            Some(id) => {
                let slot = rows.get_mut(&id).ok_or(ProductError::NotFound(id))?;
                *slot = product.clone();
            }
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                product.id = Some(id);
                rows.insert(id, product.clone());
            }
        }
        Ok(product)
    }

    async fn delete(&self, product: &Product) -> Result<()> {
        let id = product
            .id
            .ok_or_else(|| anyhow!("cannot delete a product that was never saved"))?;
        self.rows
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(ProductError::NotFound(id))
    }
}
