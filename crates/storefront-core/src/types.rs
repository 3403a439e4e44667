//! # Domain Types
//!
//! The product record supplied by the catalog.
//!
//! ```text
//! ┌─────────────────────────┐
//! │        Product          │
//! │  ─────────────────────  │
//! │  id (ProductId)         │
//! │  name                   │
//! │  price (Money)          │
//! │  image                  │
//! │  description            │
//! └─────────────────────────┘
//! ```
//!
//! Products are immutable once handed to the cart. A `CartItem` carries its
//! own copy, so the line keeps the name and price it was added with.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Unique identifier of a catalog product.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct ProductId(u32);

impl ProductId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        ProductId(id)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available in the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,

    /// Display name shown on the card and in the drawer.
    pub name: String,

    /// Unit price in cents.
    pub price: Money,

    /// Path or URL of the product image.
    pub image: String,

    /// Short marketing copy.
    pub description: String,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_display() {
        assert_eq!(ProductId::new(42).to_string(), "42");
    }

    #[test]
    fn test_product_serializes_with_plain_id_and_cents() {
        let product = Product::new(3, "Ergonomic Laptop Stand", Money::from_cents(8_999), "", "");
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["price"], 8_999);
        assert_eq!(json["name"], "Ergonomic Laptop Stand");
    }
}
