//! # Product Commands
//!
//! Commands behind the product grid: listing cards and "Add to Cart".

use chrono::Utc;
use serde::Serialize;
use tracing::debug;

use crate::commands::cart::CartTotals;
use crate::error::ApiError;
use crate::state::{CartState, DrawerState, FeedbackKind, StoreConfig};
use storefront_core::{CartEngine, Catalog, CoreError, Product, ProductId};

/// One card in the product grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    #[serde(flatten)]
    pub product: Product,

    /// The "N in cart" badge; `None` hides it
    pub in_cart: Option<u32>,

    /// Disables the button and labels it "Max Reached"
    pub at_max: bool,
}

impl ProductCard {
    fn new(product: &Product, cart: &CartEngine) -> Self {
        ProductCard {
            product: product.clone(),
            in_cart: cart.quantity_of(product.id),
            at_max: cart.is_at_max(product.id),
        }
    }
}

/// Result of an "Add to Cart" click.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartResponse {
    /// False when the product was already at the ceiling
    pub added: bool,
    pub card: ProductCard,
    pub totals: CartTotals,
}

/// Lists the catalog in order, annotated with cart state.
pub fn list_products(catalog: &Catalog, cart: &CartState) -> Vec<ProductCard> {
    debug!(count = catalog.len(), "list_products command");
    cart.with_cart(|c| {
        catalog
            .products()
            .iter()
            .map(|p| ProductCard::new(p, c))
            .collect()
    })
}

/// Gets a single card.
pub fn get_product(
    catalog: &Catalog,
    cart: &CartState,
    product_id: ProductId,
) -> Result<ProductCard, ApiError> {
    debug!(product_id = %product_id, "get_product command");
    let product = catalog
        .get(product_id)
        .ok_or(CoreError::ProductNotFound(product_id))?;
    Ok(cart.with_cart(|c| ProductCard::new(product, c)))
}

/// Adds one unit of a catalog product to the cart.
///
/// ## Behavior
/// - Unknown id: `NOT_FOUND`
/// - Already at the ceiling: nothing changes, `added` is false, no banner
/// - Otherwise: one unit added and the "Added to Cart!" badge shown
///
/// The ceiling check and the add happen under one lock, so `added` always
/// describes what the engine did.
pub fn add_to_cart(
    catalog: &Catalog,
    cart: &CartState,
    drawer: &DrawerState,
    config: &StoreConfig,
    product_id: ProductId,
) -> Result<AddToCartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = catalog
        .get(product_id)
        .ok_or(CoreError::ProductNotFound(product_id))?;

    let response = cart.with_cart_mut(|c| {
        let added = !c.is_at_max(product_id);
        if added {
            c.add_item(product);
        }
        AddToCartResponse {
            added,
            card: ProductCard::new(product, c),
            totals: CartTotals::from(&*c),
        }
    });

    if response.added {
        drawer.show(
            FeedbackKind::Added,
            "Added to Cart!",
            Utc::now(),
            config.added_badge_ms,
        );
    } else {
        debug!(product_id = %product_id, "add_to_cart skipped, already at maximum");
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn setup() -> (Catalog, CartState, DrawerState, StoreConfig) {
        (
            Catalog::demo(),
            CartState::new(),
            DrawerState::new(),
            StoreConfig::default(),
        )
    }

    #[test]
    fn test_list_products_fresh_cart() {
        let (catalog, cart, _, _) = setup();

        let cards = list_products(&catalog, &cart);

        assert_eq!(cards.len(), 6);
        assert!(cards.iter().all(|c| c.in_cart.is_none() && !c.at_max));
        assert_eq!(cards[0].product.name, "Premium Wireless Headphones");
    }

    #[test]
    fn test_add_to_cart_updates_badge() {
        let (catalog, cart, drawer, config) = setup();
        let speaker = ProductId::new(4);

        add_to_cart(&catalog, &cart, &drawer, &config, speaker).unwrap();
        let response = add_to_cart(&catalog, &cart, &drawer, &config, speaker).unwrap();

        assert!(response.added);
        assert_eq!(response.card.in_cart, Some(2));
        assert_eq!(response.totals.total_cents, 2 * 14_999);

        let feedback = drawer.feedback(Utc::now()).unwrap();
        assert_eq!(feedback.kind, FeedbackKind::Added);
        assert_eq!(feedback.message, "Added to Cart!");
    }

    #[test]
    fn test_add_to_cart_at_max_is_skipped() {
        let (catalog, cart, drawer, config) = setup();
        let watch = ProductId::new(2);
        for _ in 0..10 {
            assert!(add_to_cart(&catalog, &cart, &drawer, &config, watch).unwrap().added);
        }
        let drawer = DrawerState::new();

        let response = add_to_cart(&catalog, &cart, &drawer, &config, watch).unwrap();

        assert!(!response.added);
        assert!(response.card.at_max);
        assert_eq!(response.card.in_cart, Some(10));
        assert_eq!(response.totals.total_cents, 10 * 39_999);
        assert!(drawer.feedback(Utc::now()).is_none());

        let cards = list_products(&catalog, &cart);
        assert!(cards[1].at_max);
        assert!(!cards[0].at_max);
    }

    #[test]
    fn test_add_unknown_product() {
        let (catalog, cart, drawer, config) = setup();

        let err = add_to_cart(&catalog, &cart, &drawer, &config, ProductId::new(42)).unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(cart.with_cart(|c| c.is_empty()));
    }

    #[test]
    fn test_get_product() {
        let (catalog, cart, _, _) = setup();

        let card = get_product(&catalog, &cart, ProductId::new(5)).unwrap();
        assert_eq!(card.product.name, "Multi-Port USB-C Hub");

        assert!(get_product(&catalog, &cart, ProductId::new(0)).is_err());
    }

    #[test]
    fn test_card_json_is_flat() {
        let (catalog, cart, _, _) = setup();

        let json = serde_json::to_value(&list_products(&catalog, &cart)[2]).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["price"], 8_999);
        assert!(json["inCart"].is_null());
        assert_eq!(json["atMax"], false);
    }
}
