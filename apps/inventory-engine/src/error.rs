//! Error taxonomy for the inventory engine.
//!
//! Every failure crossing the application boundary is a [`ServiceError`]
//! carrying a stable, machine-checkable [`ErrorCode`].
//!
//! # Codes
//!
//! | Code | HTTP | Usage |
//! |------|------|-------|
//! | `VALIDATION_ERROR` | 400 | Malformed or out-of-range input |
//! | `UNAUTHENTICATED` | 401 | Missing or unreadable caller identity |
//! | `FORBIDDEN` | 403 | Caller's role does not permit the action |
//! | `NOT_FOUND` | 404 | Addressed record does not exist |
//! | `DUPLICATE_NAME` | 409 | Category name or user email already taken |
//! | `REFERENTIAL_CONFLICT` | 409 | Record is still referenced |
//! | `INSUFFICIENT_STOCK` | 409 | Order exceeds stock on hand |
//! | `INVALID_REFERENCE` | 422 | Product points at a missing category/supplier |
//! | `INTERNAL_ERROR` | 500 | Storage or unexpected failure |

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::accounts::AccountError;
use crate::domain::catalog::CatalogError;
use crate::domain::ordering::OrderError;
use crate::domain::shared::DomainError;

/// Error codes for the inventory engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Invalid request body or field value.
    ValidationError,
    /// Addressed record not found.
    NotFound,
    /// Name or email already in use.
    DuplicateName,
    /// Dangling category or supplier reference.
    InvalidReference,
    /// Delete blocked by existing references.
    ReferentialConflict,
    /// Not enough stock for the order.
    InsufficientStock,
    /// No usable caller identity.
    Unauthenticated,
    /// Role does not permit the action.
    Forbidden,
    /// Internal server error.
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status for this error.
    #[must_use]
    pub const fn http_status(&self) -> StatusCode {
        match self {
            Self::ValidationError => StatusCode::BAD_REQUEST,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::DuplicateName | Self::ReferentialConflict | Self::InsufficientStock => {
                StatusCode::CONFLICT
            }
            Self::InvalidReference => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the stable code string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::DuplicateName => "DUPLICATE_NAME",
            Self::InvalidReference => "INVALID_REFERENCE",
            Self::ReferentialConflict => "REFERENTIAL_CONFLICT",
            Self::InsufficientStock => "INSUFFICIENT_STOCK",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::Forbidden => "FORBIDDEN",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Label used for rejection metrics.
    #[must_use]
    pub const fn metric_label(&self) -> &'static str {
        match self {
            Self::ValidationError => "validation",
            Self::NotFound => "not_found",
            Self::DuplicateName => "duplicate",
            Self::InvalidReference => "invalid_reference",
            Self::ReferentialConflict => "referential_conflict",
            Self::InsufficientStock => "insufficient_stock",
            Self::Unauthenticated => "unauthenticated",
            Self::Forbidden => "forbidden",
            Self::InternalError => "internal",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// A coded error with context, returned by every use case.
#[derive(Debug, Error)]
pub struct ServiceError {
    code: ErrorCode,
    message: String,
    context: Vec<(String, String)>,
}

impl ServiceError {
    /// Create a new service error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: Vec::new(),
        }
    }

    /// Add context to the error.
    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the context.
    #[must_use]
    pub fn context(&self) -> &[(String, String)] {
        &self.context
    }

    /// Returns true for server-side failures.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self.code, ErrorCode::InternalError)
    }

    /// Convert to the JSON error envelope.
    ///
    /// Internal errors are reported generically; details stay in the logs.
    #[must_use]
    pub fn to_http_response(&self) -> HttpErrorResponse {
        let message = if self.is_internal() {
            "Server error".to_string()
        } else {
            self.message.clone()
        };
        HttpErrorResponse {
            success: false,
            code: self.code.reason().to_string(),
            message,
        }
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.reason(), self.message)
    }
}

/// HTTP error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpErrorResponse {
    /// Always false.
    pub success: bool,
    /// Stable error code string.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

/// Convenience constructors for common errors.
impl ServiceError {
    /// Invalid request.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    /// Record not found.
    #[must_use]
    pub fn not_found(entity: &str, id: &str) -> Self {
        Self::new(ErrorCode::NotFound, format!("{entity} not found")).with_context("id", id)
    }

    /// Missing or unreadable identity.
    #[must_use]
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthenticated, message)
    }

    /// Internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        let field = err.field().to_string();
        Self::validation(err.to_string()).with_context("field", field)
    }
}

impl From<CatalogError> for ServiceError {
    fn from(err: CatalogError) -> Self {
        let message = err.to_string();
        match err {
            CatalogError::InvalidField { field, .. } => {
                Self::validation(message).with_context("field", field)
            }
            CatalogError::NotFound { entity, id } => Self::not_found(entity, &id),
            CatalogError::DuplicateName { name } => {
                Self::new(ErrorCode::DuplicateName, message).with_context("name", name)
            }
            CatalogError::InvalidReference { field, id } => {
                Self::new(ErrorCode::InvalidReference, message).with_context(field, id)
            }
            CatalogError::ReferentialConflict { entity, references } => {
                Self::new(ErrorCode::ReferentialConflict, message)
                    .with_context("entity", entity.label())
                    .with_context("references", references.to_string())
            }
            CatalogError::Storage { .. } => Self::internal(message),
        }
    }
}

impl From<OrderError> for ServiceError {
    fn from(err: OrderError) -> Self {
        let message = err.to_string();
        match err {
            OrderError::InvalidQuantity { .. } => {
                Self::validation(message).with_context("field", "quantity")
            }
            OrderError::ProductNotFound { product_id } => {
                Self::not_found("Product", &product_id)
            }
            OrderError::InsufficientStock {
                product_id,
                requested,
                available,
            } => Self::new(ErrorCode::InsufficientStock, message)
                .with_context("product_id", product_id)
                .with_context("requested", requested.to_string())
                .with_context("available", available.to_string()),
            OrderError::TotalOverflow { product_id, .. } => Self::validation(message)
                .with_context("field", "quantity")
                .with_context("product_id", product_id),
            OrderError::NotFound { order_id } => Self::not_found("Order", &order_id),
            OrderError::Storage { .. } => Self::internal(message),
        }
    }
}

impl From<AccountError> for ServiceError {
    fn from(err: AccountError) -> Self {
        let message = err.to_string();
        match err {
            AccountError::InvalidField { field, .. } => {
                Self::validation(message).with_context("field", field)
            }
            AccountError::SelfDeletion => Self::validation(message),
            AccountError::NotFound { user_id } => Self::not_found("User", &user_id),
            AccountError::DuplicateEmail { email } => {
                Self::new(ErrorCode::DuplicateName, message).with_context("email", email)
            }
            AccountError::Forbidden { action } => {
                Self::new(ErrorCode::Forbidden, message).with_context("action", action)
            }
            AccountError::Storage { .. } => Self::internal(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::GuardedEntity;

    #[test]
    fn test_error_code_http_mapping() {
        assert_eq!(
            ErrorCode::ValidationError.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::InsufficientStock.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::InvalidReference.http_status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ErrorCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_referential_conflict_conversion() {
        let err: ServiceError = CatalogError::ReferentialConflict {
            entity: GuardedEntity::Category,
            references: 1,
        }
        .into();
        assert_eq!(err.code(), ErrorCode::ReferentialConflict);
        let body = err.to_http_response();
        assert!(!body.success);
        assert_eq!(body.code, "REFERENTIAL_CONFLICT");
        assert_eq!(body.message, "Cannot delete category associated with Products");
    }

    #[test]
    fn test_insufficient_stock_context() {
        let err: ServiceError = OrderError::InsufficientStock {
            product_id: "p-1".to_string(),
            requested: 2,
            available: 1,
        }
        .into();
        assert_eq!(err.code(), ErrorCode::InsufficientStock);
        assert!(
            err.context()
                .contains(&("available".to_string(), "1".to_string()))
        );
    }

    #[test]
    fn test_internal_message_is_generic() {
        let err: ServiceError = CatalogError::Storage {
            message: "disk on fire".to_string(),
        }
        .into();
        assert!(err.is_internal());
        assert_eq!(err.to_http_response().message, "Server error");
        assert!(err.to_string().contains("disk on fire"));
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::DuplicateName).unwrap();
        assert_eq!(json, "\"DUPLICATE_NAME\"");
    }
}
