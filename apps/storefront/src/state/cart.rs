//! # Cart State
//!
//! Shares one [`CartEngine`] between every view of a session.
//!
//! ## Thread Safety
//! The engine itself has no synchronization. It is wrapped in
//! `Arc<Mutex<T>>` so that:
//! 1. Several views can hold a handle to the same cart
//! 2. Only one mutation is in flight at a time
//! 3. Readers never see a line whose total has not been refolded yet
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  View Action              Command                  Engine Call          │
//! │  ───────────              ───────                  ───────────          │
//! │                                                                         │
//! │  Add to Cart ────────────► add_to_cart() ─────────► add_item()          │
//! │  "+" ────────────────────► increase_quantity() ───► increase_quantity() │
//! │  "-" ────────────────────► decrease_quantity() ───► decrease_quantity() │
//! │  Confirm Remove ─────────► confirm_removal() ─────► remove_item()       │
//! │  Open Drawer ────────────► get_cart() ────────────► snapshot()          │
//! │                                                                         │
//! │  NOTE: All calls take the Mutex lock; reads release it right away.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use storefront_core::{CartEngine, CartSnapshot};

/// Session-wide cart handle. Cloning shares the same cart.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<CartEngine>>,
}

impl CartState {
    /// Creates a handle to a fresh, empty cart.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(CartEngine::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// # use storefront_app::state::CartState;
    /// let cart_state = CartState::new();
    /// let empty = cart_state.with_cart(|cart| cart.is_empty());
    /// assert!(empty);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartEngine) -> R,
    {
        // Every engine transition completes before the guard drops, so a
        // poisoned lock still holds a consistent cart.
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartEngine) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }

    /// Copies the cart out for a view.
    pub fn snapshot(&self) -> CartSnapshot {
        self.with_cart(CartEngine::snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{Catalog, ProductId};

    #[test]
    fn test_clones_share_one_cart() {
        let catalog = Catalog::demo();
        let speaker = catalog.get(ProductId::new(4)).unwrap();

        let badge_view = CartState::new();
        let drawer_view = badge_view.clone();

        drawer_view.with_cart_mut(|c| c.add_item(speaker));

        assert_eq!(badge_view.with_cart(|c| c.item_count()), 1);
        assert_eq!(badge_view.snapshot().total.cents(), 14_999);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_mutations_are_serialized() {
        let catalog = Catalog::demo();
        let cart = CartState::new();

        let mut handles = Vec::new();
        for product in catalog.products().iter().cloned() {
            let cart = cart.clone();
            handles.push(tokio::spawn(async move {
                // 15 adds against a ceiling of 10
                for _ in 0..15 {
                    cart.with_cart_mut(|c| c.add_item(&product));
                    tokio::task::yield_now().await;
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let snapshot = cart.snapshot();
        assert_eq!(snapshot.item_count(), catalog.len());
        assert!(snapshot.items.iter().all(|i| i.quantity == 10));

        let expected: i64 = catalog.products().iter().map(|p| p.price.cents() * 10).sum();
        assert_eq!(snapshot.total.cents(), expected);
    }
}
