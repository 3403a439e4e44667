//! # State Module
//!
//! Session state shared between the storefront's views.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  CartState   │  │ DrawerState  │  │   StoreConfig    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc<Mutex<  │  │  pending     │  │  store_name      │              │
//! │  │  CartEngine  │  │  removal,    │  │  currency        │              │
//! │  │  >>          │  │  banner      │  │  banner timings  │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CartState: one mutation at a time via Mutex                         │
//! │  • DrawerState: same, independent lock                                 │
//! │  • StoreConfig: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod drawer;

pub use cart::CartState;
pub use config::StoreConfig;
pub use drawer::{DrawerState, Feedback, FeedbackKind};
