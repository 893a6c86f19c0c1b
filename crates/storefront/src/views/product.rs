//! Product listing and detail views.

use crate::catalog::CategorySummary;
use crate::models::Product;

/// Product display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub category: String,
    pub image: String,
    pub sizes: Vec<String>,
    pub description: String,
    pub features: Vec<String>,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price.to_string(),
            category: product.category.to_string(),
            image: product.image.clone(),
            sizes: product.sizes.clone(),
            description: product.description.clone(),
            features: product.features.clone(),
        }
    }
}

/// Category navigation entry, e.g. `Formal (2)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView {
    pub id: String,
    pub label: String,
}

impl From<&CategorySummary> for CategoryView {
    fn from(summary: &CategorySummary) -> Self {
        Self {
            id: summary.id().to_string(),
            label: format!("{} ({})", summary.name, summary.count),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::{categories, find_product};
    use elegance_core::ProductId;

    #[test]
    fn test_product_view() {
        let product = find_product(&ProductId::new("6")).unwrap();
        let view = ProductView::from(product);
        assert_eq!(view.name, "Midnight Glamour");
        assert_eq!(view.price, "$299.00");
        assert_eq!(view.category, "evening");
        assert_eq!(view.sizes, ["XS", "S", "M", "L", "XL"]);
        assert_eq!(view.features.len(), 4);
    }

    #[test]
    fn test_category_labels() {
        let labels: Vec<String> = categories()
            .iter()
            .map(|s| CategoryView::from(s).label)
            .collect();
        assert_eq!(labels[0], "All Dresses (6)");
        assert_eq!(labels[2], "Evening (2)");
    }
}
