//! Field-level validation for inbound payloads.
//!
//! Constraints are declared as ordered `(field, check, message)` rules and
//! evaluated imperatively. For each field only the first failing rule is
//! reported, so a client gets one message per field it has to fix.
//! Evaluation is pure and never touches storage.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dto::{ProductPayload, ProductRequest, StockPayload, StockUpdate};
use crate::types::Category;

pub const NAME_BLANK: &str = "name must not be blank";
pub const NAME_LENGTH: &str = "name must be between 3 and 100 characters";
pub const DESCRIPTION_LENGTH: &str = "description must not exceed 500 characters";
pub const PRICE_MISSING: &str = "price must not be null";
pub const PRICE_NOT_POSITIVE: &str = "price must be greater than 0";
pub const STOCK_MISSING: &str = "stock must not be null";
pub const STOCK_NEGATIVE: &str = "stock must not be negative";
pub const STOCK_TOO_LARGE: &str = "stock must not exceed 2147483647";
pub const CATEGORY_MISSING: &str = "category must not be null";
pub const CATEGORY_UNKNOWN: &str =
    "category must be one of: ELECTRONICS, CLOTHING, FOOD, HOME, BOOKS, SPORTS, TOYS";

const NAME_MIN_CHARS: usize = 3;
const NAME_MAX_CHARS: usize = 100;
const DESCRIPTION_MAX_CHARS: usize = 500;

// ── Violation map ─────────────────────────────────────────────

/// Field name → first failing message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: &str) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Record a violation unless the field already has one.
    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

// ── Rules ─────────────────────────────────────────────────────

/// One constraint on one field. `check` returns `true` when the value is acceptable.
pub struct Rule<T> {
    pub field: &'static str,
    pub check: fn(&T) -> bool,
    pub message: &'static str,
}

/// Evaluate `rules` in order, keeping the first failure per field.
pub fn evaluate<T>(rules: &[Rule<T>], payload: &T) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for rule in rules {
        if errors.contains(rule.field) {
            continue;
        }
        if !(rule.check)(payload) {
            errors.add(rule.field, rule.message);
        }
    }
    errors
}

fn min_price() -> Decimal {
    Decimal::new(1, 2)
}

fn stock_in_range(stock: Option<i64>) -> bool {
    stock.map_or(true, |s| s <= i64::from(i32::MAX))
}

pub const PRODUCT_RULES: &[Rule<ProductPayload>] = &[
    Rule {
        field: "name",
        check: |p| p.name.as_deref().is_some_and(|n| !n.trim().is_empty()),
        message: NAME_BLANK,
    },
    Rule {
        field: "name",
        check: |p| {
            p.name.as_deref().map_or(true, |n| {
                (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&n.chars().count())
            })
        },
        message: NAME_LENGTH,
    },
    Rule {
        field: "description",
        check: |p| {
            p.description
                .as_deref()
                .map_or(true, |d| d.chars().count() <= DESCRIPTION_MAX_CHARS)
        },
        message: DESCRIPTION_LENGTH,
    },
    Rule {
        field: "price",
        check: |p| p.price.is_some(),
        message: PRICE_MISSING,
    },
    Rule {
        field: "price",
        check: |p| p.price.map_or(true, |price| price >= min_price()),
        message: PRICE_NOT_POSITIVE,
    },
    Rule {
        field: "stock",
        check: |p| p.stock.is_some(),
        message: STOCK_MISSING,
    },
    Rule {
        field: "stock",
        check: |p| p.stock.map_or(true, |s| s >= 0),
        message: STOCK_NEGATIVE,
    },
    Rule {
        field: "stock",
        check: |p| stock_in_range(p.stock),
        message: STOCK_TOO_LARGE,
    },
    Rule {
        field: "category",
        check: |p| p.category.is_some(),
        message: CATEGORY_MISSING,
    },
    Rule {
        field: "category",
        check: |p| {
            p.category
                .as_deref()
                .map_or(true, |c| c.parse::<Category>().is_ok())
        },
        message: CATEGORY_UNKNOWN,
    },
];

pub const STOCK_RULES: &[Rule<StockPayload>] = &[
    Rule {
        field: "stock",
        check: |p| p.stock.is_some(),
        message: STOCK_MISSING,
    },
    Rule {
        field: "stock",
        check: |p| p.stock.map_or(true, |s| s >= 0),
        message: STOCK_NEGATIVE,
    },
    Rule {
        field: "stock",
        check: |p| stock_in_range(p.stock),
        message: STOCK_TOO_LARGE,
    },
];

// ── Validate ──────────────────────────────────────────────────

/// Turn a raw payload into its typed request, or report every invalid field.
pub trait Validate {
    type Output;

    fn validate(self) -> Result<Self::Output, ValidationErrors>;
}

impl Validate for ProductPayload {
    type Output = ProductRequest;

    fn validate(self) -> Result<ProductRequest, ValidationErrors> {
        let errors = evaluate(PRODUCT_RULES, &self);
        if !errors.is_empty() {
            return Err(errors);
        }

        // The rules above guarantee every lookup below succeeds.
        let name = self
            .name
            .ok_or_else(|| ValidationErrors::single("name", NAME_BLANK))?;
        let price = self
            .price
            .ok_or_else(|| ValidationErrors::single("price", PRICE_MISSING))?;
        let stock = self
            .stock
            .and_then(|s| i32::try_from(s).ok())
            .ok_or_else(|| ValidationErrors::single("stock", STOCK_MISSING))?;
        let category = self
            .category
            .as_deref()
            .and_then(|c| c.parse::<Category>().ok())
            .ok_or_else(|| ValidationErrors::single("category", CATEGORY_MISSING))?;

        Ok(ProductRequest {
            name,
            description: self.description,
            price,
            stock,
            category,
        })
    }
}

impl Validate for StockPayload {
    type Output = StockUpdate;

    fn validate(self) -> Result<StockUpdate, ValidationErrors> {
        let errors = evaluate(STOCK_RULES, &self);
        if !errors.is_empty() {
            return Err(errors);
        }
        let stock = self
            .stock
            .and_then(|s| i32::try_from(s).ok())
            .ok_or_else(|| ValidationErrors::single("stock", STOCK_MISSING))?;
        Ok(StockUpdate { stock })
    }
}
