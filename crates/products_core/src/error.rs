use thiserror::Error;

use crate::types::{ProductId, UnknownCategory};
use crate::validation::{ValidationErrors, CATEGORY_UNKNOWN};

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found with id: {0}")]
    NotFound(ProductId),

    #[error("validation error")]
    Validation(ValidationErrors),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl ProductError {
    pub fn http_status(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::Internal(_) => 500,
        }
    }

    /// Field → message map, present only for validation failures.
    pub fn violations(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for ProductError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<UnknownCategory> for ProductError {
    fn from(_: UnknownCategory) -> Self {
        Self::Validation(ValidationErrors::single("category", CATEGORY_UNKNOWN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── http_status ──────────────────────────────────────────────

    #[test]
    fn http_status_not_found() {
        assert_eq!(ProductError::NotFound(1).http_status(), 404);
    }

    #[test]
    fn http_status_validation() {
        let err = ProductError::Validation(ValidationErrors::single("name", "bad"));
        assert_eq!(err.http_status(), 400);
    }

    #[test]
    fn http_status_internal() {
        let err = ProductError::Internal(anyhow::anyhow!("boom"));
        assert_eq!(err.http_status(), 500);
    }

    // ── Display ──────────────────────────────────────────────────

    #[test]
    fn display_not_found_names_the_id() {
        assert_eq!(
            ProductError::NotFound(17).to_string(),
            "Product not found with id: 17"
        );
    }

    #[test]
    fn display_validation_is_fixed() {
        let err = ProductError::Validation(ValidationErrors::single("stock", "neg"));
        assert_eq!(err.to_string(), "validation error");
        assert_eq!(err.violations().and_then(|v| v.get("stock")), Some("neg"));
    }

    #[test]
    fn unknown_category_becomes_category_violation() {
        let err: ProductError = "nope".parse::<crate::types::Category>().unwrap_err().into();
        assert_eq!(err.http_status(), 400);
        assert_eq!(
            err.violations().and_then(|v| v.get("category")),
            Some(CATEGORY_UNKNOWN)
        );
    }

    #[test]
    fn internal_has_no_violations() {
        let err = ProductError::Internal(anyhow::anyhow!("connection refused"));
        assert!(err.violations().is_none());
        assert_eq!(err.to_string(), "connection refused");
    }
}
