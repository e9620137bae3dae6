//! GET /health: liveness plus a storage round trip.

use std::sync::Arc;

use axum::{Extension, Json};
use products_core::ProductService;
use serde_json::{json, Value};

use crate::error::AppError;

pub async fn health(
    Extension(service): Extension<Arc<dyn ProductService>>,
) -> Result<Json<Value>, AppError> {
    service.health().await?;
    Ok(Json(json!({ "status": "ok" })))
}
