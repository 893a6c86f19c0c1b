//! Domain models for the storefront.
//!
//! These are the records held by the state containers and written into
//! their snapshots. Field names serialize in camelCase.

pub mod cart;
pub mod product;
pub mod user;

pub use cart::{CartItem, NewCartItem};
pub use product::Product;
pub use user::{NewOrder, Order, OrderItem, User};
