//! # Cart Commands
//!
//! Commands behind the cart drawer.
//!
//! ## Drawer Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Drawer Lifecycle                                     │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────────┐                     │
//! │  │  Empty   │────►│ In Cart  │────►│   Confirm    │                     │
//! │  │  Drawer  │     │          │     │   Removal    │                     │
//! │  └──────────┘     └──────────┘     └──────────────┘                     │
//! │        ▲               │  ▲            │       │                        │
//! │        │       increase│  │   cancel   │       │ confirm                │
//! │        │       decrease│  └────────────┘       │                        │
//! │        │               ▼                       ▼                        │
//! │        └──────── last line removed ◄──── remove_item                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bound outcomes never fail a command: they surface as a feedback banner
//! and the unchanged cart is returned.

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{CartState, DrawerState, Feedback, FeedbackKind, StoreConfig};
use storefront_core::{
    CartEngine, CartItem, CoreError, ProductId, MAX_ITEM_QUANTITY, MIN_ITEM_QUANTITY,
};

/// Cart totals for the drawer footer and header badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Distinct lines
    pub item_count: usize,
    /// Sum of quantities
    pub total_quantity: u32,
    pub total_cents: i64,
    /// Some line sits at the ceiling
    pub any_at_max: bool,
}

impl From<&CartEngine> for CartTotals {
    fn from(cart: &CartEngine) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total_cents: cart.total().cents(),
            any_at_max: cart.any_at_max(),
        }
    }
}

/// Everything the drawer renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
    pub feedback: Option<Feedback>,
    pub pending_removal: Option<ProductId>,
}

impl CartResponse {
    fn build(cart: &CartState, drawer: &DrawerState) -> Self {
        let (items, totals) = cart.with_cart(|c| (c.items().to_vec(), CartTotals::from(c)));
        CartResponse {
            items,
            totals,
            feedback: drawer.feedback(Utc::now()),
            pending_removal: drawer.pending_removal(),
        }
    }
}

/// Banner text for a refused "+" click.
pub fn max_quantity_message() -> String {
    format!("Maximum quantity ({}) reached for this item", MAX_ITEM_QUANTITY)
}

/// Banner text for a refused "-" click.
pub fn min_quantity_message() -> String {
    format!(
        "Minimum quantity is {}. Use remove button to delete item.",
        MIN_ITEM_QUANTITY
    )
}

/// Gets the current cart contents.
///
/// ## User Workflow
/// ```text
/// ┌────────────────────────────────────────────────────────────────┐
/// │  Shopping Cart                                       2 items   │
/// ├────────────────────────────────────────────────────────────────┤
/// │  Premium Wireless Headphones   [-] 2 [+]   Subtotal: $599.98   │
/// │  Precision Wireless Mouse      [-] 1 [+]   Subtotal: $69.99    │
/// ├────────────────────────────────────────────────────────────────┤
/// │  Total Amount: $669.97                              3 items    │
/// └────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(cart: &CartState, drawer: &DrawerState) -> CartResponse {
    debug!("get_cart command");
    CartResponse::build(cart, drawer)
}

/// "+" on a drawer line.
///
/// At the ceiling the cart is left alone and the Max banner is shown.
pub fn increase_quantity(
    cart: &CartState,
    drawer: &DrawerState,
    config: &StoreConfig,
    product_id: ProductId,
) -> CartResponse {
    debug!(product_id = %product_id, "increase_quantity command");

    if let Err(err) = cart.with_cart_mut(|c| c.increase_quantity(product_id)) {
        report_bound(drawer, config, &err);
    }

    CartResponse::build(cart, drawer)
}

/// "-" on a drawer line.
///
/// At the floor the cart is left alone and the Min banner is shown.
pub fn decrease_quantity(
    cart: &CartState,
    drawer: &DrawerState,
    config: &StoreConfig,
    product_id: ProductId,
) -> CartResponse {
    debug!(product_id = %product_id, "decrease_quantity command");

    if let Err(err) = cart.with_cart_mut(|c| c.decrease_quantity(product_id)) {
        report_bound(drawer, config, &err);
    }

    CartResponse::build(cart, drawer)
}

fn report_bound(drawer: &DrawerState, config: &StoreConfig, err: &CoreError) {
    let (kind, message) = match err {
        CoreError::MaxQuantityReached { .. } => (FeedbackKind::Max, max_quantity_message()),
        CoreError::MinQuantityReached { .. } => (FeedbackKind::Min, min_quantity_message()),
        _ => return,
    };

    info!(%err, "quantity bound reached");
    drawer.show(kind, message, Utc::now(), config.feedback_ttl_ms);
}

/// Trash icon on a drawer line: asks for confirmation, nothing is removed yet.
///
/// ## Errors
/// `NOT_FOUND` if the product has no line in the cart.
pub fn request_removal(
    cart: &CartState,
    drawer: &DrawerState,
    product_id: ProductId,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "request_removal command");

    if cart.with_cart(|c| c.get(product_id).is_none()) {
        return Err(ApiError::not_found("Cart item", product_id));
    }

    drawer.request_removal(product_id);
    Ok(CartResponse::build(cart, drawer))
}

/// "Cancel" in the confirmation dialog.
pub fn cancel_removal(cart: &CartState, drawer: &DrawerState) -> CartResponse {
    debug!("cancel_removal command");
    drawer.take_pending_removal();
    CartResponse::build(cart, drawer)
}

/// "Remove" in the confirmation dialog.
///
/// Removes the pending line whatever its quantity and shows
/// "{name} removed from cart". Without a pending request this does nothing.
pub fn confirm_removal(
    cart: &CartState,
    drawer: &DrawerState,
    config: &StoreConfig,
) -> CartResponse {
    let Some(product_id) = drawer.take_pending_removal() else {
        debug!("confirm_removal command with nothing pending");
        return CartResponse::build(cart, drawer);
    };
    debug!(product_id = %product_id, "confirm_removal command");

    let removed_name = cart.with_cart_mut(|c| {
        let name = c.get(product_id).map(|item| item.product.name.clone());
        c.remove_item(product_id);
        name
    });

    if let Some(name) = removed_name {
        drawer.show(
            FeedbackKind::Removed,
            format!("{} removed from cart", name),
            Utc::now(),
            config.feedback_ttl_ms,
        );
    }

    CartResponse::build(cart, drawer)
}
