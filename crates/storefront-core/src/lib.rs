//! # storefront-core: Pure Cart Logic for the Storefront
//!
//! This crate owns the shopping cart's state transitions. Everything here is
//! deterministic, synchronous and free of I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                         Views                                   │   │
//! │  │    Product Grid ──► Header Badge ──► Cart Drawer                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  apps/storefront (commands)                     │   │
//! │  │    add_to_cart, increase_quantity, confirm_removal, etc.        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  catalog  │  │   │
//! │  │   │  Product  │  │   Money   │  │CartEngine │  │  Catalog  │  │   │
//! │  │   │ ProductId │  │           │  │ CartItem  │  │ validation│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • PURE STATE TRANSITIONS                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product and its identifier
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart engine, line items and snapshots
//! - [`catalog`] - The read-only product list the views render
//! - [`error`] - Domain error types
//! - [`validation`] - Product validation rules
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{CartEngine, Catalog, ProductId};
//!
//! let catalog = Catalog::demo();
//! let mut cart = CartEngine::new();
//!
//! let headphones = catalog.get(ProductId::new(1)).unwrap();
//! cart.add_item(headphones);
//! cart.add_item(headphones);
//!
//! assert_eq!(cart.quantity_of(headphones.id), Some(2));
//! assert_eq!(cart.total().cents(), 2 * 29_999);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartEngine, CartItem, CartSnapshot};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{Product, ProductId};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single line item.
///
/// Reaching it disables the add and increase controls for that product.
pub const MAX_ITEM_QUANTITY: u32 = 10;

/// Minimum quantity of a line item that is still in the cart.
///
/// Going below it is only possible through explicit removal.
pub const MIN_ITEM_QUANTITY: u32 = 1;

/// Maximum length of a product name.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Highest unit price the catalog accepts, in cents ($2,000,000.00).
///
/// A cart holds at most one line per `ProductId` (2^32 of them), each at
/// most `MAX_ITEM_QUANTITY` units, so with this ceiling every line total
/// and the cart total fit in an `i64`.
pub const MAX_PRICE_CENTS: i64 = 200_000_000;
