//! Product handlers.
//!
//! GET    /products                       list every product
//! GET    /products/:id                   fetch one product
//! GET    /products/category/:category    list products in a category
//! POST   /products                       create (201 + Location)
//! PUT    /products/:id                   full replace
//! PATCH  /products/:id/stock             overwrite the stock level
//! DELETE /products/:id                   remove (204)

use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        OriginalUri, Path,
    },
    http::{header, StatusCode},
    Extension, Json,
};
use products_core::{
    Category, Product, ProductError, ProductId, ProductPayload, ProductResponse, ProductService,
    StockPayload, Validate,
};

use crate::error::AppError;

type Service = Extension<Arc<dyn ProductService>>;
type Created = (StatusCode, [(header::HeaderName, String); 1], Json<ProductResponse>);

fn respond(products: Vec<Product>) -> Json<Vec<ProductResponse>> {
    Json(products.into_iter().map(ProductResponse::from).collect())
}

pub async fn list(Extension(service): Service) -> Result<Json<Vec<ProductResponse>>, AppError> {
    Ok(respond(service.list().await?))
}

pub async fn get(
    Extension(service): Service,
    path: Result<Path<ProductId>, PathRejection>,
) -> Result<Json<ProductResponse>, AppError> {
    let Path(id) = path?;
    Ok(Json(service.get(id).await?.into()))
}

pub async fn list_by_category(
    Extension(service): Service,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let Path(raw) = path?;
    let category: Category = raw.parse()?;
    Ok(respond(service.list_by_category(category).await?))
}

pub async fn create(
    Extension(service): Service,
    OriginalUri(uri): OriginalUri,
    body: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<Created, AppError> {
    let Json(payload) = body?;
    let request = payload.validate()?;
    let created = service.create(request.into()).await?;
    let id = created
        .id
        .ok_or_else(|| ProductError::Internal(anyhow!("stored product has no id")))?;
    let location = format!("{}/{id}", uri.path().trim_end_matches('/'));
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created.into()),
    ))
}

pub async fn replace(
    Extension(service): Service,
    path: Result<Path<ProductId>, PathRejection>,
    body: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<Json<ProductResponse>, AppError> {
    let Path(id) = path?;
    let Json(payload) = body?;
    let request = payload.validate()?;
    Ok(Json(service.replace(id, request.into()).await?.into()))
}

pub async fn update_stock(
    Extension(service): Service,
    path: Result<Path<ProductId>, PathRejection>,
    body: Result<Json<StockPayload>, JsonRejection>,
) -> Result<Json<ProductResponse>, AppError> {
    let Path(id) = path?;
    let Json(payload) = body?;
    let update = payload.validate()?;
    Ok(Json(service.update_stock(id, update.stock).await?.into()))
}

pub async fn delete(
    Extension(service): Service,
    path: Result<Path<ProductId>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
