//! # Storefront App Library
//!
//! Session layer between the storefront's views and `storefront-core`.
//!
//! ## Module Organization
//! ```text
//! storefront_app/
//! ├── lib.rs          ◄─── You are here (setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Shared cart handle
//! │   ├── drawer.rs   ◄─── Removal dialog and feedback banner
//! │   └── config.rs   ◄─── Configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Product grid commands
//! │   └── cart.rs     ◄─── Cart drawer commands
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use storefront_core::{Catalog, Money, Product, ProductId};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use commands::{cart as cart_cmd, product as product_cmd};
use error::ApiError;
use state::{CartState, DrawerState, StoreConfig};

/// Everything one shopping session needs, constructed explicitly and passed
/// by reference to the commands.
#[derive(Debug, Clone)]
pub struct Storefront {
    pub config: StoreConfig,
    pub catalog: Catalog,
    pub cart: CartState,
    pub drawer: DrawerState,
}

impl Storefront {
    /// A session over the demo catalog.
    pub fn new(config: StoreConfig) -> Self {
        Storefront {
            config,
            catalog: Catalog::demo(),
            cart: CartState::new(),
            drawer: DrawerState::new(),
        }
    }

    /// A session over a caller-supplied catalog.
    ///
    /// ## Errors
    /// `VALIDATION_ERROR` if a product is invalid or an id repeats.
    pub fn with_products(config: StoreConfig, products: Vec<Product>) -> Result<Self, ApiError> {
        Ok(Storefront {
            config,
            catalog: Catalog::new(products)?,
            cart: CartState::new(),
            drawer: DrawerState::new(),
        })
    }
}

/// Runs a short scripted session against the demo catalog and logs what the
/// views would render.
///
/// ## Startup Sequence
/// 1. Initialize tracing
/// 2. Load configuration from the environment
/// 3. Build the session state
/// 4. Walk through add, adjust and remove
pub fn run() {
    init_tracing();

    let config = StoreConfig::from_env();
    info!(store = %config.store_name, "Starting storefront session");

    let shop = Storefront::new(config);
    for card in product_cmd::list_products(&shop.catalog, &shop.cart) {
        info!(
            id = %card.product.id,
            price = %shop.config.format_currency(card.product.price),
            "{}",
            card.product.name
        );
    }

    if let Err(err) = demo_session(&shop) {
        warn!(%err, "demo session stopped early");
    }

    let response = cart_cmd::get_cart(&shop.cart, &shop.drawer);
    let total = Money::from_cents(response.totals.total_cents);
    info!(
        lines = response.totals.item_count,
        quantity = response.totals.total_quantity,
        total = %shop.config.format_currency(total),
        "Cart at end of session"
    );
    match serde_json::to_string(&response) {
        Ok(json) => debug!(%json, "cart response"),
        Err(err) => warn!(%err, "could not serialize cart response"),
    }
}

fn demo_session(shop: &Storefront) -> Result<(), ApiError> {
    let headphones = ProductId::new(1);
    let mouse = ProductId::new(6);

    let add = |id| {
        product_cmd::add_to_cart(&shop.catalog, &shop.cart, &shop.drawer, &shop.config, id)
    };
    add(headphones)?;
    add(headphones)?;
    add(mouse)?;

    cart_cmd::increase_quantity(&shop.cart, &shop.drawer, &shop.config, mouse);
    cart_cmd::decrease_quantity(&shop.cart, &shop.drawer, &shop.config, mouse);
    // Already at 1: shows the Min banner
    cart_cmd::decrease_quantity(&shop.cart, &shop.drawer, &shop.config, mouse);

    cart_cmd::request_removal(&shop.cart, &shop.drawer, mouse)?;
    cart_cmd::confirm_removal(&shop.cart, &shop.drawer, &shop.config);

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_app=trace` - Trace this crate only
/// - Default: INFO, DEBUG for storefront crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront_app=debug,storefront_core=debug"));

    // A subscriber may already be installed by an embedding host.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_demo_session_end_state() {
        let shop = Storefront::new(StoreConfig::default());

        demo_session(&shop).unwrap();

        let response = cart_cmd::get_cart(&shop.cart, &shop.drawer);
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].quantity, 2);
        assert_eq!(response.totals.total_cents, 2 * 29_999);
        assert_eq!(
            response.feedback.unwrap().message,
            "Precision Wireless Mouse removed from cart"
        );
    }

    #[test]
    fn test_with_products_validates() {
        let products = vec![
            Product::new(1, "Lamp", Money::from_cents(2_500), "", ""),
            Product::new(1, "Lamp again", Money::from_cents(2_500), "", ""),
        ];

        let err = Storefront::with_products(StoreConfig::default(), products).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_with_products_custom_catalog() {
        let products = vec![Product::new(10, "Lamp", Money::from_cents(2_500), "", "")];
        let shop = Storefront::with_products(StoreConfig::default(), products).unwrap();

        let cards = product_cmd::list_products(&shop.catalog, &shop.cart);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].product.id, ProductId::new(10));
    }

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        init_tracing();
        init_tracing();
    }
}
