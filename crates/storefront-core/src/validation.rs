//! # Validation Module
//!
//! Rules a product must satisfy before the catalog hands it to views.
//!
//! The cart engine itself trusts its input: every product it sees comes
//! from a [`Catalog`](crate::Catalog), and the catalog runs these checks once
//! at construction.
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_price, validate_product_name};
//! use storefront_core::Money;
//!
//! assert!(validate_product_name("Precision Wireless Mouse").is_ok());
//! assert!(validate_price(Money::from_cents(-1)).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Product;
use crate::{MAX_PRICE_CENTS, MAX_PRODUCT_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (free items)
/// - At most `MAX_PRICE_CENTS`
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() || price.cents() > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Runs every per-product rule.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_name(&product.name)?;
    validate_price(product.price)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Smart Fitness Watch").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(200)).is_ok());
        assert!(validate_product_name(&"A".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(6_999)).is_ok());
        assert_eq!(
            validate_price(Money::from_cents(-100)),
            Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: MAX_PRICE_CENTS,
            })
        );
    }

    #[test]
    fn test_validate_price_ceiling() {
        assert!(validate_price(Money::from_cents(MAX_PRICE_CENTS)).is_ok());
        assert_eq!(
            validate_price(Money::from_cents(MAX_PRICE_CENTS + 1)),
            Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: MAX_PRICE_CENTS,
            })
        );
        assert!(validate_price(Money::from_cents(i64::MAX)).is_err());
    }

    #[test]
    fn test_validate_product_reports_first_failure() {
        let product = Product::new(1, "", Money::from_cents(-1), "", "");
        assert!(matches!(
            validate_product(&product),
            Err(ValidationError::Required { .. })
        ));
    }
}
