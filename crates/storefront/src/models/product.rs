//! Catalog product type.

use serde::{Deserialize, Serialize};

use elegance_core::{Category, Price, ProductId};

/// A product in the static catalog. Never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Image reference (asset path).
    pub image: String,
    pub category: Category,
    /// Sizes this product can be ordered in, smallest first.
    pub sizes: Vec<String>,
    pub description: String,
    pub features: Vec<String>,
}

impl Product {
    /// Returns `true` if `size` is one of the available sizes.
    #[must_use]
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }
}
