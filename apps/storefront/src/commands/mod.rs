//! # Commands
//!
//! The functions views call. Each takes the state it needs and returns a
//! serializable response.
//!
//! - [`product`] - product grid: list cards, add to cart
//! - [`cart`] - cart drawer: quantities, removal with confirmation

pub mod cart;
pub mod product;
