//! Postgres implementation of the core `ProductStore` port.
//!
//! A newtype over `PgPool`. All SQL is runtime-checked (`sqlx::query_as`,
//! not `sqlx::query_as!`) to avoid a compile-time database requirement.

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use products_core::error::ProductError;
use products_core::ports::{ProductStore, Result};
use products_core::{Category, Product, ProductId};

use crate::sqlx_types::PgProductRow;

const PRODUCT_COLUMNS: &str = "id, name, description, price, stock, category";

pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, product: &Product) -> Result<Product> {
        let row = sqlx::query_as::<_, PgProductRow>(&format!(
            r#"
            INSERT INTO products (name, description, price, stock, category)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.stock)
        .bind(product.category.as_str())
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert product")?;
        into_product(row)
    }

    async fn update(&self, id: ProductId, product: &Product) -> Result<Product> {
        let row = sqlx::query_as::<_, PgProductRow>(&format!(
            r#"
            UPDATE products
            SET name = $2, description = $3, price = $4, stock = $5, category = $6
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.stock)
        .bind(product.category.as_str())
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update product")?;
        match row {
            Some(row) => into_product(row),
            None => Err(ProductError::NotFound(id)),
        }
    }
}

fn into_product(row: PgProductRow) -> Result<Product> {
    row.try_into()
        .map_err(|e: String| ProductError::Internal(anyhow!(e)))
}

fn into_products(rows: Vec<PgProductRow>) -> Result<Vec<Product>> {
    rows.into_iter().map(into_product).collect()
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn find_all(&self) -> Result<Vec<Product>> {
        let rows = sqlx::query_as::<_, PgProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .context("Failed to list products")?;
        into_products(rows)
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>> {
        let row = sqlx::query_as::<_, PgProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to get product by id")?;
        row.map(into_product).transpose()
    }

    async fn find_by_category(&self, category: Category) -> Result<Vec<Product>> {
        let rows = sqlx::query_as::<_, PgProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE category = $1 ORDER BY id"
        ))
        .bind(category.as_str())
        .fetch_all(&self.pool)
        .await
        .context("Failed to list products by category")?;
        into_products(rows)
    }

    async fn save(&self, product: Product) -> Result<Product> {
        match product.id {
            None => self.insert(&product).await,
            Some(id) => self.update(id, &product).await,
        }
    }

    async fn delete(&self, product: &Product) -> Result<()> {
        let id = product
            .id
            .ok_or_else(|| anyhow!("cannot delete a product that was never saved"))?;
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete product")?;
        if result.rows_affected() == 0 {
            debug!(product_id = id, "delete matched no rows");
            return Err(ProductError::NotFound(id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("Database ping failed")?;
        Ok(())
    }
}
