//! Core domain types for the product catalogue.
//! These are pure value types; no sqlx, no HTTP.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage-assigned product identifier.
pub type ProductId = i64;

// ── Category ──────────────────────────────────────────────────

/// Closed set of product categories.
///
/// The canonical text form is the upper-case token; it is what the wire
/// carries and what storage persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Electronics,
    Clothing,
    Food,
    Home,
    Books,
    Sports,
    Toys,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Electronics,
        Category::Clothing,
        Category::Food,
        Category::Home,
        Category::Books,
        Category::Sports,
        Category::Toys,
    ];

    /// Comma-separated list of every accepted token, in declaration order.
    pub const EXPECTED: &'static str = "ELECTRONICS, CLOTHING, FOOD, HOME, BOOKS, SPORTS, TOYS";

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "ELECTRONICS",
            Category::Clothing => "CLOTHING",
            Category::Food => "FOOD",
            Category::Home => "HOME",
            Category::Books => "BOOKS",
            Category::Sports => "SPORTS",
            Category::Toys => "TOYS",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category token that is not a member of [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{token}': category must be one of: {expected}", expected = Category::EXPECTED)]
pub struct UnknownCategory {
    pub token: String,
}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Exact, case-sensitive match against the canonical tokens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory {
                token: s.to_string(),
            })
    }
}

// ── Product ───────────────────────────────────────────────────

/// The persisted product entity.
///
/// `id` is `None` until storage assigns one on first save and is never
/// changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Option<ProductId>,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    pub category: Category,
}

impl Product {
    /// Overwrite every field except the identifier.
    pub fn replace_fields(&mut self, other: Product) {
        self.name = other.name;
        self.description = other.description;
        self.price = other.price;
        self.stock = other.stock;
        self.category = other.category;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_canonical_token() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        let err = "electronics".parse::<Category>().unwrap_err();
        assert_eq!(err.token, "electronics");
        assert!(err.to_string().contains("ELECTRONICS, CLOTHING"));
    }

    #[test]
    fn expected_lists_all_members_in_order() {
        let joined = Category::ALL
            .iter()
            .map(Category::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        assert_eq!(joined, Category::EXPECTED);
    }

    #[test]
    fn serde_uses_canonical_tokens() {
        let json = serde_json::to_string(&Category::Electronics).unwrap();
        assert_eq!(json, "\"ELECTRONICS\"");
        let back: Category = serde_json::from_str("\"TOYS\"").unwrap();
        assert_eq!(back, Category::Toys);
    }

    #[test]
    fn replace_fields_keeps_identifier() {
        let mut stored = Product {
            id: Some(7),
            name: "Old".into(),
            description: Some("old".into()),
            price: Decimal::new(100, 2),
            stock: 1,
            category: Category::Books,
        };
        stored.replace_fields(Product {
            id: Some(99),
            name: "New name".into(),
            description: None,
            price: Decimal::new(250, 2),
            stock: 3,
            category: Category::Home,
        });
        assert_eq!(stored.id, Some(7));
        assert_eq!(stored.name, "New name");
        assert_eq!(stored.description, None);
        assert_eq!(stored.stock, 3);
        assert_eq!(stored.category, Category::Home);
    }
}
