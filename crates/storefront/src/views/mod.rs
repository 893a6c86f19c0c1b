//! Display-ready projections of storefront state.
//!
//! Views flatten domain records into pre-formatted strings so that renderers
//! (the terminal front end today) only lay text out.

pub mod cart;
pub mod order;
pub mod product;

pub use cart::{CartItemView, CartView};
pub use order::{OrderItemView, OrderView, format_date};
pub use product::{CategoryView, ProductView};
