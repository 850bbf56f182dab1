//! # Error Types
//!
//! Domain-specific error types for shophub-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shophub-core errors (this file)                                       │
//! │  ├── CoreError        - Lookups and purchase rules at the edges        │
//! │  └── ValidationError  - Catalog / user input that fails a rule         │
//! │                                                                         │
//! │  shophub-state                                                          │
//! │  └── (none)           - Every store operation is total                 │
//! │                                                                         │
//! │  shell (app)                                                            │
//! │  └── ShellError       - What the command session reports               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ShellError → user                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stores never return these. Removing a missing line or filtering an empty
//! catalog are defined no-ops; errors only exist where data enters the
//! storefront or a user command names something that is not there.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain errors raised at the storefront edges.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No catalog product carries the requested id.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The product is listed but marked out of stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Click "Add to Cart" on Mechanical Keyboard
    ///      │
    ///      ▼
    /// in_stock == false
    ///      │
    ///      ▼
    /// OutOfStock("4") ──► UI shows "Out of Stock"
    /// ```
    #[error("Product {0} is out of stock")]
    OutOfStock(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g., malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoreError::OutOfStock("4".to_string()).to_string(),
            "Product 4 is out of stock"
        );
        assert_eq!(
            CoreError::ProductNotFound("99".to_string()).to_string(),
            "Product not found: 99"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "id".to_string(),
        };
        assert_eq!(err.to_string(), "id is required");

        let err = ValidationError::MustBeNonNegative {
            field: "priceCents".to_string(),
        };
        assert_eq!(err.to_string(), "priceCents must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
