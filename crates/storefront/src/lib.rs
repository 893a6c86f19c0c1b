//! Elegance Storefront library.
//!
//! This crate holds everything behind the storefront views: the static
//! catalog, the cart and auth state containers with their durable snapshots,
//! and the flows that span both containers (add to cart, checkout).
//!
//! # Architecture
//!
//! - [`stores`] - `CartStore` and `AuthStore`, each owning its state and
//!   flushing a snapshot to [`storage`] after every mutation
//! - [`catalog`] - Seeded products, categories, filtering and sorting
//! - [`state`] - `AppState`, the owned context handed to the view layer
//! - [`views`] - Display-ready projections of carts, products and orders

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod storage;
pub mod stores;
pub mod views;
