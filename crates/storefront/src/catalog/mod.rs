//! Static product catalog.
//!
//! The catalog is seeded once on first access and never changes. Lookups are
//! linear scans; there are six products.

mod filter;

pub use filter::{PriceRange, ProductFilter, SortBy, SortByError};

use std::sync::LazyLock;

use elegance_core::{Category, Price, ProductId};

use crate::models::Product;

/// Number of products shown on the landing page.
const FEATURED_COUNT: usize = 4;

/// Maximum number of related products shown on a product page.
const RELATED_COUNT: usize = 4;

const SIZES: [&str; 5] = ["XS", "S", "M", "L", "XL"];

static PRODUCTS: LazyLock<Vec<Product>> = LazyLock::new(seed);

/// A category entry for navigation, with how many products it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySummary {
    /// `None` for the "All Dresses" entry.
    pub category: Option<Category>,
    pub name: &'static str,
    pub count: usize,
}

impl CategorySummary {
    /// Identifier used in links and filters (`all` for the catch-all entry).
    #[must_use]
    pub fn id(&self) -> &'static str {
        self.category.map_or("all", |c| c.as_str())
    }
}

/// All products, in catalog order.
#[must_use]
pub fn products() -> &'static [Product] {
    &PRODUCTS
}

/// Look up a product by id.
#[must_use]
pub fn find_product(id: &ProductId) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == *id)
}

/// Category navigation entries: "All Dresses" first, then each category.
#[must_use]
pub fn categories() -> Vec<CategorySummary> {
    let all = CategorySummary {
        category: None,
        name: "All Dresses",
        count: PRODUCTS.len(),
    };

    std::iter::once(all)
        .chain(Category::ALL.into_iter().map(|category| CategorySummary {
            category: Some(category),
            name: category.label(),
            count: PRODUCTS.iter().filter(|p| p.category == category).count(),
        }))
        .collect()
}

/// Products highlighted on the landing page.
#[must_use]
pub fn featured_products() -> &'static [Product] {
    let end = FEATURED_COUNT.min(PRODUCTS.len());
    PRODUCTS.get(..end).unwrap_or_default()
}

/// Other products in the same category as `product`, at most four.
#[must_use]
pub fn related_products(product: &Product) -> Vec<&'static Product> {
    PRODUCTS
        .iter()
        .filter(|p| p.id != product.id && p.category == product.category)
        .take(RELATED_COUNT)
        .collect()
}

fn product(
    id: &str,
    name: &str,
    price: i64,
    image: &str,
    category: Category,
    description: &str,
    features: [&str; 4],
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::from_whole(price),
        image: format!("/assets/{image}"),
        category,
        sizes: SIZES.iter().map(ToString::to_string).collect(),
        description: description.to_owned(),
        features: features.iter().map(ToString::to_string).collect(),
    }
}

fn seed() -> Vec<Product> {
    vec![
        product(
            "1",
            "Rosé Elegance Dress",
            189,
            "dress-1.jpg",
            Category::Evening,
            "A stunning rose-colored dress perfect for special occasions. Features a flowing silhouette that flatters every figure.",
            [
                "Premium silk blend",
                "Hand-finished details",
                "Invisible zip closure",
                "Dry clean only",
            ],
        ),
        product(
            "2",
            "Crimson Romance Dress",
            249,
            "dress-2.jpg",
            Category::Formal,
            "Bold and beautiful red dress that makes a statement. Perfect for formal events and romantic dinners.",
            [
                "Luxe satin fabric",
                "Structured bodice",
                "Hidden back zipper",
                "Professional cleaning recommended",
            ],
        ),
        product(
            "3",
            "Navy Sophisticate",
            199,
            "dress-3.jpg",
            Category::Formal,
            "Timeless navy blue dress that exudes sophistication. A versatile piece for business and formal occasions.",
            [
                "Wrinkle-resistant fabric",
                "Classic cut",
                "Side zip",
                "Machine washable",
            ],
        ),
        product(
            "4",
            "Pure Elegance White",
            229,
            "dress-4.jpg",
            Category::Summer,
            "Pristine white dress perfect for summer events. Light and airy with beautiful draping.",
            [
                "Breathable cotton blend",
                "UV protection",
                "Easy care fabric",
                "Adjustable straps",
            ],
        ),
        product(
            "5",
            "Sunset Glow Maxi",
            179,
            "dress-1.jpg",
            Category::Casual,
            "Flowing maxi dress in warm sunset tones. Perfect for casual outings and weekend wear.",
            [
                "Comfort stretch fabric",
                "Maxi length",
                "Elastic waist",
                "Machine washable",
            ],
        ),
        product(
            "6",
            "Midnight Glamour",
            299,
            "dress-3.jpg",
            Category::Evening,
            "Sophisticated evening dress in deep midnight blue. Features elegant beading and a flattering silhouette.",
            [
                "Hand-beaded details",
                "Silk lining",
                "Concealed zipper",
                "Dry clean only",
            ],
        ),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_six_unique_products() {
        let all = products();
        assert_eq!(all.len(), 6);
        for (i, p) in all.iter().enumerate() {
            assert!(all.iter().skip(i + 1).all(|other| other.id != p.id));
        }
    }

    #[test]
    fn test_find_product() {
        let product = find_product(&ProductId::new("2")).unwrap();
        assert_eq!(product.name, "Crimson Romance Dress");
        assert_eq!(product.price, Price::from_whole(249));
        assert!(product.has_size("XL"));
        assert!(!product.has_size("XXL"));

        assert!(find_product(&ProductId::new("99")).is_none());
    }

    #[test]
    fn test_category_counts() {
        let summaries = categories();
        let counts: Vec<(&str, usize)> = summaries.iter().map(|s| (s.id(), s.count)).collect();
        assert_eq!(
            counts,
            vec![
                ("all", 6),
                ("casual", 1),
                ("evening", 2),
                ("formal", 2),
                ("summer", 1),
            ]
        );
    }

    #[test]
    fn test_featured_is_first_four() {
        let ids: Vec<&str> = featured_products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_related_products_share_category_and_exclude_self() {
        let rose = find_product(&ProductId::new("1")).unwrap();
        let related = related_products(rose);
        let ids: Vec<&str> = related.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["6"]);

        let white = find_product(&ProductId::new("4")).unwrap();
        assert!(related_products(white).is_empty());
    }
}
