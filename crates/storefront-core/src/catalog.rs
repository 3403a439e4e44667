//! # Catalog
//!
//! The fixed, ordered product list the storefront renders.
//!
//! The catalog is read-only: it exposes lookups but no mutation. The cart
//! never queries it; views look a product up here and push it into the cart
//! with `add_item`.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Product, ProductId};
use crate::validation::validate_product;

/// A validated, ordered list of products with unique ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, validating every product and rejecting duplicate ids.
    ///
    /// Listing order is the order given here.
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            validate_product(product)?;

            if !seen.insert(product.id) {
                return Err(ValidationError::Duplicate {
                    field: "product id".to_string(),
                    value: product.id.to_string(),
                }
                .into());
            }
        }

        Ok(Catalog { products })
    }

    /// The storefront's demo line-up.
    pub fn demo() -> Self {
        let products = vec![
            Product::new(
                1,
                "Premium Wireless Headphones",
                Money::from_cents(29_999),
                "/images/headphones.jpg",
                "Studio-quality wireless headphones with active noise cancellation and 30-hour battery life.",
            ),
            Product::new(
                2,
                "Smart Fitness Watch",
                Money::from_cents(39_999),
                "/images/smartwatch.jpg",
                "Advanced fitness tracking with heart rate monitoring, GPS, and comprehensive health insights.",
            ),
            Product::new(
                3,
                "Ergonomic Laptop Stand",
                Money::from_cents(8_999),
                "/images/laptop-stand.jpg",
                "Premium aluminum laptop stand with adjustable height and excellent heat dissipation.",
            ),
            Product::new(
                4,
                "Portable Bluetooth Speaker",
                Money::from_cents(14_999),
                "/images/speaker.jpg",
                "High-fidelity portable speaker with 360-degree sound and waterproof design for any adventure.",
            ),
            Product::new(
                5,
                "Multi-Port USB-C Hub",
                Money::from_cents(7_999),
                "/images/usb-hub.jpg",
                "Professional USB-C hub with 4K HDMI, multiple USB ports, and 100W power delivery.",
            ),
            Product::new(
                6,
                "Precision Wireless Mouse",
                Money::from_cents(6_999),
                "/images/mouse.jpg",
                "Ergonomic wireless mouse with precision tracking, customizable buttons, and long battery life.",
            ),
        ];

        Catalog { products }
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
