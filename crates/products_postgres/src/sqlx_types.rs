//! Row types decoded by sqlx, converted into core types at the adapter edge.

use products_core::{Category, Product};
use rust_decimal::Decimal;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PgProductRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    pub category: String,
}

impl TryFrom<PgProductRow> for Product {
    type Error = String;

    fn try_from(row: PgProductRow) -> Result<Self, Self::Error> {
        let category = row
            .category
            .parse::<Category>()
            .map_err(|e| format!("product {} has corrupt category: {e}", row.id))?;
        Ok(Product {
            id: Some(row.id),
            name: row.name,
            description: row.description,
            price: row.price,
            stock: row.stock,
            category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(category: &str) -> PgProductRow {
        PgProductRow {
            id: 3,
            name: "Wool Scarf".into(),
            description: None,
            price: Decimal::new(2500, 2),
            stock: 8,
            category: category.into(),
        }
    }

    #[test]
    fn converts_valid_row() {
        let product = Product::try_from(row("CLOTHING")).unwrap();
        assert_eq!(product.id, Some(3));
        assert_eq!(product.category, Category::Clothing);
        assert_eq!(product.price, Decimal::new(2500, 2));
    }

    #[test]
    fn rejects_unknown_category() {
        let err = Product::try_from(row("GADGETS")).unwrap_err();
        assert!(err.contains("product 3"));
        assert!(err.contains("GADGETS"));
    }
}
