//! ProductService: lookup-or-fail, mutation and persistence for products.
//!
//! Takes the storage port via `Arc<dyn ProductStore>` so the same logic runs
//! against Postgres or the in-memory store.
//!
//! Every mutating operation goes through [`ProductService::get`] first, so
//! the not-found contract lives in exactly one place.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::error::ProductError;
use crate::ports::{ProductStore, Result};
use crate::types::{Category, Product, ProductId};

// ── ProductService trait ──────────────────────────────────────

#[async_trait]
pub trait ProductService: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>>;

    /// Fails with `NotFound` when no product has this identifier.
    async fn get(&self, id: ProductId) -> Result<Product>;

    async fn list_by_category(&self, category: Category) -> Result<Vec<Product>>;

    /// Persist an already-validated product; storage assigns the identifier.
    async fn create(&self, product: Product) -> Result<Product>;

    /// Full replace of every field except the identifier.
    async fn replace(&self, id: ProductId, product: Product) -> Result<Product>;

    /// Overwrite only the stock level.
    async fn update_stock(&self, id: ProductId, stock: i32) -> Result<Product>;

    async fn delete(&self, id: ProductId) -> Result<()>;

    /// Whether the storage collaborator is reachable.
    async fn health(&self) -> Result<()>;
}

// ── ProductServiceImpl ────────────────────────────────────────

pub struct ProductServiceImpl {
    store: Arc<dyn ProductStore>,
}

impl ProductServiceImpl {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProductService for ProductServiceImpl {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Product>> {
        let products = self.store.find_all().await?;
        debug!(count = products.len(), "listed products");
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: ProductId) -> Result<Product> {
        match self.store.find_by_id(id).await? {
            Some(product) => Ok(product),
            None => {
                debug!("product not found");
                Err(ProductError::NotFound(id))
            }
        }
    }

    #[instrument(skip(self))]
    async fn list_by_category(&self, category: Category) -> Result<Vec<Product>> {
        let products = self.store.find_by_category(category).await?;
        debug!(count = products.len(), "listed products by category");
        Ok(products)
    }

    #[instrument(skip(self, product), fields(name = %product.name))]
    async fn create(&self, mut product: Product) -> Result<Product> {
        product.id = None;
        let saved = self.store.save(product).await?;
        info!(product_id = ?saved.id, "created product");
        Ok(saved)
    }

    #[instrument(skip(self, product))]
    async fn replace(&self, id: ProductId, product: Product) -> Result<Product> {
        let mut existing = self.get(id).await?;
        existing.replace_fields(product);
        let saved = self.store.save(existing).await?;
        info!("replaced product");
        Ok(saved)
    }

    #[instrument(skip(self))]
    async fn update_stock(&self, id: ProductId, stock: i32) -> Result<Product> {
        let mut existing = self.get(id).await?;
        existing.stock = stock;
        let saved = self.store.save(existing).await?;
        info!("updated stock");
        Ok(saved)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ProductId) -> Result<()> {
        let existing = self.get(id).await?;
        self.store.delete(&existing).await?;
        info!("deleted product");
        Ok(())
    }

    async fn health(&self) -> Result<()> {
        self.store.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryProductStore;
    use rust_decimal::Decimal;

    fn keyboard() -> Product {
        Product {
            id: None,
            name: "Mechanical Keyboard".into(),
            description: Some("RGB".into()),
            price: Decimal::new(12050, 2),
            stock: 50,
            category: Category::Electronics,
        }
    }

    fn service() -> (Arc<InMemoryProductStore>, ProductServiceImpl) {
        let store = Arc::new(InMemoryProductStore::new());
        let service = ProductServiceImpl::new(store.clone());
        (store, service)
    }

    #[tokio::test]
    async fn create_assigns_identifier() {
        let (_, service) = service();
        let created = service.create(keyboard()).await.unwrap();
        assert!(created.id.is_some());
        assert_eq!(created.name, "Mechanical Keyboard");
    }

    #[tokio::test]
    async fn create_ignores_caller_identifier() {
        let (store, service) = service();
        let created = service
            .create(Product {
                id: Some(500),
                ..keyboard()
            })
            .await
            .unwrap();
        assert_eq!(created.id, Some(1));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let (_, service) = service();
        let err = service.get(404).await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(404)));
    }

    #[tokio::test]
    async fn mutations_on_missing_id_fail_without_touching_storage() {
        let (store, service) = service();
        let kept = service.create(keyboard()).await.unwrap();

        assert!(matches!(
            service.replace(77, keyboard()).await,
            Err(ProductError::NotFound(77))
        ));
        assert!(matches!(
            service.update_stock(77, 1).await,
            Err(ProductError::NotFound(77))
        ));
        assert!(matches!(
            service.delete(77).await,
            Err(ProductError::NotFound(77))
        ));

        assert_eq!(store.len().await, 1);
        assert_eq!(service.get(kept.id.unwrap()).await.unwrap(), kept);
    }

    #[tokio::test]
    async fn replace_overwrites_everything_but_id() {
        let (_, service) = service();
        let created = service.create(keyboard()).await.unwrap();
        let id = created.id.unwrap();

        let replacement = Product {
            id: None,
            name: "Trail Shoes".into(),
            description: None,
            price: Decimal::new(8999, 2),
            stock: 12,
            category: Category::Sports,
        };
        let replaced = service.replace(id, replacement).await.unwrap();

        assert_eq!(replaced.id, Some(id));
        assert_eq!(replaced.name, "Trail Shoes");
        assert_eq!(replaced.description, None);
        assert_eq!(replaced.price, Decimal::new(8999, 2));
        assert_eq!(replaced.stock, 12);
        assert_eq!(replaced.category, Category::Sports);
        assert_eq!(service.get(id).await.unwrap(), replaced);
    }

    #[tokio::test]
    async fn update_stock_changes_only_stock() {
        let (_, service) = service();
        let created = service.create(keyboard()).await.unwrap();
        let id = created.id.unwrap();

        let updated = service.update_stock(id, 45).await.unwrap();

        assert_eq!(updated.stock, 45);
        assert_eq!(
            Product {
                stock: created.stock,
                ..updated.clone()
            },
            created
        );
        assert_eq!(service.get(id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let (store, service) = service();
        let id = service.create(keyboard()).await.unwrap().id.unwrap();

        service.delete(id).await.unwrap();

        assert!(matches!(
            service.get(id).await,
            Err(ProductError::NotFound(found)) if found == id
        ));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn list_by_category_returns_only_matches() {
        let (_, service) = service();
        service.create(keyboard()).await.unwrap();
        service
            .create(Product {
                name: "Wool Scarf".into(),
                category: Category::Clothing,
                ..keyboard()
            })
            .await
            .unwrap();

        let electronics = service.list_by_category(Category::Electronics).await.unwrap();
        assert_eq!(electronics.len(), 1);
        assert_eq!(electronics[0].name, "Mechanical Keyboard");
        assert!(service
            .list_by_category(Category::Toys)
            .await
            .unwrap()
            .is_empty());
        assert_eq!(service.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn health_delegates_to_store() {
        let (_, service) = service();
        assert!(service.health().await.is_ok());
    }
}
