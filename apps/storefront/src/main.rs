//! # Storefront Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration
//! 3. Create session state (CartState, DrawerState, Catalog)
//! 4. Run the demo session

fn main() {
    // The actual setup is in lib.rs for better testability
    storefront_app::run();
}
