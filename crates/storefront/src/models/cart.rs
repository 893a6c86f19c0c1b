//! Cart line item types.

use serde::{Deserialize, Serialize};

use elegance_core::{Price, ProductId};

use super::Product;

/// A line in the cart.
///
/// Lines are unique by `(id, size)`; name, price and image are copied from
/// the product when the line is first added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub size: String,
    /// Always at least 1 while the line exists.
    pub quantity: u32,
}

impl CartItem {
    /// Returns `true` if this line has the given key.
    #[must_use]
    pub fn matches(&self, id: &ProductId, size: &str) -> bool {
        self.id == *id && self.size == size
    }

    /// Price of this line (`price * quantity`).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price * self.quantity
    }
}

/// A cart line without a quantity, as passed to `CartStore::add_item`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCartItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub size: String,
}

impl NewCartItem {
    /// Build a line for `product` in `size`, copying the display fields.
    #[must_use]
    pub fn from_product(product: &Product, size: impl Into<String>) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            size: size.into(),
        }
    }

    /// Turn into a cart line with quantity 1.
    #[must_use]
    pub fn into_line(self) -> CartItem {
        CartItem {
            id: self.id,
            name: self.name,
            price: self.price,
            image: self.image,
            size: self.size,
            quantity: 1,
        }
    }
}
