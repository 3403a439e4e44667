//! # Cart Engine
//!
//! Owns the authoritative cart state and the four transitions that change it.
//!
//! ## Line Item State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Each line's quantity is a bounded counter in [1, 10]                   │
//! │                                                                         │
//! │   add_item (new)                                                        │
//! │        │                                                                │
//! │        ▼        increase            increase            increase        │
//! │     ┌─────┐ ──────────────► ┌─────┐ ─────────► ... ──► ┌──────┐ ─┐      │
//! │     │  1  │                 │  2  │                    │  10  │  │ Err  │
//! │  ┌─ └─────┘ ◄────────────── └─────┘ ◄───────── ... ◄── └──────┘ ◄┘      │
//! │  │     │         decrease            decrease            │              │
//! │  └─────┘ Err                                             │ add_item     │
//! │                                                          └─► no-op      │
//! │                                                                         │
//! │   remove_item deletes the line from any state                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by product id; repeated adds bump the quantity
//! - `1 <= quantity <= 10` for every line
//! - `total == Σ price × quantity`, refolded after every mutation
//! - Lines keep first-add order
//!
//! Adding a product that is already at the ceiling is a silent no-op, while
//! `increase_quantity` at the ceiling reports `MaxQuantityReached`. Callers
//! that need feedback on add check [`CartEngine::is_at_max`] first.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, ProductId};
use crate::{MAX_ITEM_QUANTITY, MIN_ITEM_QUANTITY};

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the cart: a product copy plus how many of it.
///
/// Serialized flat, so views see `{ id, name, price, image, description,
/// quantity }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,

    pub quantity: u32,
}

impl CartItem {
    fn new(product: Product) -> Self {
        CartItem {
            product,
            quantity: MIN_ITEM_QUANTITY,
        }
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }

    #[inline]
    pub fn is_at_max(&self) -> bool {
        self.quantity >= MAX_ITEM_QUANTITY
    }

    #[inline]
    pub fn is_at_min(&self) -> bool {
        self.quantity <= MIN_ITEM_QUANTITY
    }
}

// =============================================================================
// Cart Snapshot
// =============================================================================

/// An owned copy of the cart handed to views.
///
/// Changing a snapshot never reaches the engine it came from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartSnapshot {
    pub items: Vec<CartItem>,
    pub total: Money,
}

impl CartSnapshot {
    /// Number of distinct lines (the header badge).
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all quantities (the drawer footer's "N items").
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Cart Engine
// =============================================================================

/// The cart for one shopping session.
///
/// Construct one per session and pass it by reference to whatever needs it.
/// The engine does no locking of its own; see the app crate's `CartState`
/// for a handle that can be shared between threads.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CartEngine {
    items: Vec<CartItem>,
    total: Money,
}

impl CartEngine {
    /// Creates an empty cart with a zero total.
    pub fn new() -> Self {
        CartEngine {
            items: Vec::new(),
            total: Money::zero(),
        }
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Adds one unit of `product`.
    ///
    /// ## Behavior
    /// - Not in cart: appended as a new line with quantity 1
    /// - In cart below the ceiling: quantity + 1, position unchanged
    /// - In cart at the ceiling: nothing happens
    pub fn add_item(&mut self, product: &Product) {
        match self.position(product.id) {
            Some(index) => {
                let item = &mut self.items[index];
                if item.is_at_max() {
                    return;
                }
                item.quantity += 1;
            }
            None => self.items.push(CartItem::new(product.clone())),
        }

        self.recompute_total();
    }

    /// Adds one to the quantity of the line with `id`.
    ///
    /// ## Returns
    /// - `Ok(())` after incrementing, or when no such line exists
    /// - `Err(CoreError::MaxQuantityReached)` at the ceiling; state unchanged
    pub fn increase_quantity(&mut self, id: ProductId) -> CoreResult<()> {
        let Some(index) = self.position(id) else {
            return Ok(());
        };

        let item = &mut self.items[index];
        if item.is_at_max() {
            return Err(CoreError::MaxQuantityReached {
                id,
                max: MAX_ITEM_QUANTITY,
            });
        }
        item.quantity += 1;

        self.recompute_total();
        Ok(())
    }

    /// Subtracts one from the quantity of the line with `id`.
    ///
    /// Never takes a line to zero; use [`remove_item`](Self::remove_item).
    ///
    /// ## Returns
    /// - `Ok(())` after decrementing, or when no such line exists
    /// - `Err(CoreError::MinQuantityReached)` at the floor; state unchanged
    pub fn decrease_quantity(&mut self, id: ProductId) -> CoreResult<()> {
        let Some(index) = self.position(id) else {
            return Ok(());
        };

        let item = &mut self.items[index];
        if item.is_at_min() {
            return Err(CoreError::MinQuantityReached {
                id,
                min: MIN_ITEM_QUANTITY,
            });
        }
        item.quantity -= 1;

        self.recompute_total();
        Ok(())
    }

    /// Removes the line with `id` whatever its quantity. No-op if absent.
    pub fn remove_item(&mut self, id: ProductId) {
        self.items.retain(|item| item.id() != id);
        self.recompute_total();
    }

    // -------------------------------------------------------------------------
    // Read side
    // -------------------------------------------------------------------------

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Quantity in cart, `None` if the product has no line.
    pub fn quantity_of(&self, id: ProductId) -> Option<u32> {
        self.get(id).map(|item| item.quantity)
    }

    /// Whether the product's line sits at the ceiling.
    pub fn is_at_max(&self, id: ProductId) -> bool {
        self.get(id).is_some_and(CartItem::is_at_max)
    }

    /// Whether any line sits at the ceiling.
    pub fn any_at_max(&self) -> bool {
        self.items.iter().any(CartItem::is_at_max)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Copies the current state out for a view.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
            total: self.total,
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn position(&self, id: ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Full fold over the lines; never patched incrementally.
    fn recompute_total(&mut self) {
        self.total = self.items.iter().map(CartItem::line_total).sum();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
