//! Router construction for the products server.

use std::sync::Arc;

use axum::{
    middleware as axum_mw,
    routing::{get, patch},
    Extension, Router,
};
use products_core::ProductService;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::error::shape_errors;
use crate::handlers::{self, health, products};

/// Build the full axum router with all routes and middleware.
pub fn build_router(service: Arc<dyn ProductService>) -> Router {
    let catalogue = Router::new()
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/:id",
            get(products::get)
                .put(products::replace)
                .delete(products::delete),
        )
        .route("/products/:id/stock", patch(products::update_stock))
        .route(
            "/products/category/:category",
            get(products::list_by_category),
        );

    Router::new()
        .route("/health", get(health::health))
        .merge(catalogue)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback(handlers::route_not_found)
        .layer(axum_mw::from_fn(shape_errors))
        .layer(Extension(service))
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
}
