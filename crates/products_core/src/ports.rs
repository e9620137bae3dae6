//! Storage port trait for products.
//! Implemented by `products_postgres` and by [`crate::memory`]; the service
//! depends only on this trait.

use async_trait::async_trait;

use crate::error::ProductError;
use crate::types::{Category, Product, ProductId};

pub type Result<T> = std::result::Result<T, ProductError>;

/// Row-level CRUD over the products table.
///
/// Each call is atomic on its own. Callers get no isolation across calls:
/// a lookup followed by a save may race with another writer, and the last
/// write wins.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products, in the store's natural order.
    async fn find_all(&self) -> Result<Vec<Product>>;

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>>;

    /// All products whose category equals `category`. Empty when none match.
    async fn find_by_category(&self, category: Category) -> Result<Vec<Product>>;

    /// Insert when `product.id` is `None`, otherwise update that row.
    /// Returns the stored entity with its identifier set.
    /// Updating an identifier that no longer exists is `NotFound`.
    async fn save(&self, product: Product) -> Result<Product>;

    /// Remove the row identified by `product.id`.
    async fn delete(&self, product: &Product) -> Result<()>;

    /// Cheap liveness probe used by health checks.
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
