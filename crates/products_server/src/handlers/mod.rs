pub mod health;
pub mod products;

use crate::error::AppError;

/// Fallback for paths no route matches.
pub async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}

/// Fallback for a known path hit with a method it does not route.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
