//! Wire-level shapes.
//!
//! `*Payload` types are what the HTTP layer deserializes: every field is
//! optional and loosely typed so that missing or out-of-range values reach
//! the validation rules instead of failing inside the JSON decoder.
//! Validation turns a payload into the typed request it describes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Category, ProductId};

// ── Inbound (raw) ─────────────────────────────────────────────

/// Body of `POST /products` and `PUT /products/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i64>,
    /// Kept as text; resolved against [`Category`] by validation.
    pub category: Option<String>,
}

/// Body of `PATCH /products/{id}/stock`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockPayload {
    pub stock: Option<i64>,
}

// ── Validated ─────────────────────────────────────────────────

/// A create/update request that passed every field rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    pub category: Category,
}

/// A stock-only update that passed its field rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockUpdate {
    pub stock: i32,
}

// ── Outbound ──────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: Option<ProductId>,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    pub category: Category,
}
