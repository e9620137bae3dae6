//! HTTP error mapping.
//!
//! Handlers return [`AppError`]. Its `IntoResponse` only decides the status
//! and stashes an [`ErrorReport`] in the response extensions; the
//! [`shape_errors`] middleware then renders the uniform [`ErrorResponse`]
//! body, since it is the one place that still knows the request path.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Request,
    },
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use products_core::{ProductError, UnknownCategory, ValidationErrors};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// Failure of a single request.
#[derive(Debug)]
pub enum AppError {
    Product(ProductError),
    /// Body or path could not be decoded into the expected shape.
    MalformedRequest(String),
    RouteNotFound,
    /// Path exists but does not accept the request method.
    MethodNotAllowed,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Product(err) => StatusCode::from_u16(err.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Self::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        Self::Product(err)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Product(errors.into())
    }
}

impl From<UnknownCategory> for AppError {
    fn from(err: UnknownCategory) -> Self {
        Self::Product(err.into())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedRequest(format!("malformed request body: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::MalformedRequest(format!(
            "invalid path parameter: {}",
            rejection.body_text()
        ))
    }
}

/// What the middleware needs to render an error body.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub message: String,
    pub validation_errors: Option<ValidationErrors>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let report = match self {
            Self::Product(ProductError::Internal(err)) => {
                error!(error = %format!("{err:#}"), "request failed");
                ErrorReport {
                    message: format!("internal server error: {err:#}"),
                    validation_errors: None,
                }
            }
            Self::Product(err) => {
                if let Some(errors) = err.violations() {
                    warn!(fields = errors.len(), "request failed validation");
                }
                ErrorReport {
                    message: err.to_string(),
                    validation_errors: err.violations().cloned(),
                }
            }
            Self::MalformedRequest(message) => {
                warn!(%message, "rejected malformed request");
                ErrorReport {
                    message,
                    validation_errors: None,
                }
            }
            Self::RouteNotFound => ErrorReport {
                message: "no route matches the requested path".to_string(),
                validation_errors: None,
            },
            Self::MethodNotAllowed => ErrorReport {
                message: "method not allowed for the requested path".to_string(),
                validation_errors: None,
            },
        };
        let mut response = status.into_response();
        response.extensions_mut().insert(report);
        response
    }
}

/// Uniform JSON error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub message: String,
    pub path: String,
    #[serde(
        rename = "validationErrors",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub validation_errors: Option<ValidationErrors>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, report: ErrorReport, path: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            status: status.as_u16(),
            message: report.message,
            path: path.into(),
            validation_errors: report.validation_errors,
        }
    }
}

/// Render any [`ErrorReport`] left by a handler as an [`ErrorResponse`].
pub async fn shape_errors(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let mut response = next.run(request).await;
    match response.extensions_mut().remove::<ErrorReport>() {
        Some(report) => {
            let status = response.status();
            (status, Json(ErrorResponse::new(status, report, path))).into_response()
        }
        None => response,
    }
}
