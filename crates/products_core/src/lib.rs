//! products_core: the product catalogue domain.
//!
//! Pure types, wire shapes, field validation, entity conversion, the storage
//! port and the service that enforces the not-found contract. No sqlx, no HTTP.

pub mod convert;
pub mod dto;
pub mod error;
pub mod memory;
pub mod ports;
pub mod service;
pub mod types;
pub mod validation;

pub use dto::{ProductPayload, ProductRequest, ProductResponse, StockPayload, StockUpdate};
pub use error::ProductError;
pub use memory::InMemoryProductStore;
pub use ports::ProductStore;
pub use service::{ProductService, ProductServiceImpl};
pub use types::{Category, Product, ProductId, UnknownCategory};
pub use validation::{Validate, ValidationErrors};
