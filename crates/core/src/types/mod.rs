//! Core types for Elegance.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod price;
pub mod status;

pub use category::{Category, CategoryError};
pub use id::*;
pub use price::{Price, PriceError};
pub use status::*;
