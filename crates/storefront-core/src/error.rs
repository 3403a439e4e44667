//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Cart bounds and lookups                        │
//! │  └── ValidationError  - Catalog input failures                         │
//! │                                                                         │
//! │  App errors (apps/storefront)                                          │
//! │  └── ApiError         - What views see (serialized)                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → View                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are fatal. The two bound variants are ordinary outcomes of
//! the quantity controls and leave the cart untouched.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No catalog product has this id.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Increasing the line would go past the per-item ceiling.
    ///
    /// ## User Workflow
    /// ```text
    /// Drawer shows "10" for Smart Fitness Watch
    ///      │
    ///      ▼
    /// Click "+" → increase_quantity(2)
    ///      │
    ///      ▼
    /// MaxQuantityReached { id: 2, max: 10 }
    ///      │
    ///      ▼
    /// Banner: "Maximum quantity (10) reached for this item"
    /// ```
    #[error("Maximum quantity ({max}) reached for product {id}")]
    MaxQuantityReached { id: ProductId, max: u32 },

    /// Decreasing the line would go below the per-item floor.
    /// Removing a line is a separate, explicit action.
    #[error("Minimum quantity ({min}) reached for product {id}")]
    MinQuantityReached { id: ProductId, min: u32 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors raised while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Duplicate value (e.g., two products with the same id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_messages() {
        let err = CoreError::MaxQuantityReached {
            id: ProductId::new(2),
            max: 10,
        };
        assert_eq!(err.to_string(), "Maximum quantity (10) reached for product 2");

        let err = CoreError::MinQuantityReached {
            id: ProductId::new(2),
            min: 1,
        };
        assert_eq!(err.to_string(), "Minimum quantity (1) reached for product 2");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Duplicate {
            field: "product id".to_string(),
            value: "3".to_string(),
        };
        assert_eq!(err.to_string(), "product id '3' already exists");
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
