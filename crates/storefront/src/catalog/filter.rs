//! Shop listing filters and sort orders.

use std::cmp::Ordering;

use elegance_core::{Category, Price};

use crate::models::Product;

/// Error returned when a string does not name a [`SortBy`] order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort order: {0} (expected name, price-low or price-high)")]
pub struct SortByError(pub String);

/// Sort order for the shop listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Alphabetical by product name.
    #[default]
    Name,
    /// Cheapest first.
    PriceLow,
    /// Most expensive first.
    PriceHigh,
}

impl SortBy {
    /// Returns the identifier used in query strings.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
        }
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Name => compare_names(&a.name, &b.name),
            Self::PriceLow => a.price.cmp(&b.price),
            Self::PriceHigh => b.price.cmp(&a.price),
        }
    }
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortBy {
    type Err = SortByError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            _ => Err(SortByError(s.to_owned())),
        }
    }
}

/// Case-insensitive name comparison, falling back to byte order for ties.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Price,
    pub max: Price,
}

impl PriceRange {
    /// The unfiltered range.
    pub const ANY: Self = Self::whole(0, 500);

    /// Preset bands offered in the filter sidebar.
    pub const PRESETS: [Self; 4] = [
        Self::whole(0, 100),
        Self::whole(100, 200),
        Self::whole(200, 300),
        Self::whole(300, 500),
    ];

    /// Create a range from two prices.
    #[must_use]
    pub const fn new(min: Price, max: Price) -> Self {
        Self { min, max }
    }

    const fn whole(min: i64, max: i64) -> Self {
        Self::new(Price::from_whole(min), Price::from_whole(max))
    }

    /// Returns `true` if `price` lies within the bounds (inclusive).
    #[must_use]
    pub fn contains(&self, price: Price) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::ANY
    }
}

/// Filter state of the shop listing.
///
/// An empty category selection means every category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub categories: Vec<Category>,
    pub price_range: PriceRange,
    pub sort: SortBy,
}

impl ProductFilter {
    /// A filter that matches everything, sorted by name.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `category`. Selecting it twice has no further effect.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        if !self.categories.contains(&category) {
            self.categories.push(category);
        }
        self
    }

    /// Restrict to `range`.
    #[must_use]
    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    /// Order results by `sort`.
    #[must_use]
    pub fn with_sort(mut self, sort: SortBy) -> Self {
        self.sort = sort;
        self
    }

    /// Reset every criterion to its default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` if `product` passes the category and price criteria.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        (self.categories.is_empty() || self.categories.contains(&product.category))
            && self.price_range.contains(product.price)
    }

    /// Matching products from `products`, sorted.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut matched: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();
        matched.sort_by(|a, b| self.sort.compare(a, b));
        matched
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::products;

    fn ids(list: &[&Product]) -> Vec<String> {
        list.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_default_filter_sorts_by_name() {
        let result = ProductFilter::new().apply(products());
        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Crimson Romance Dress",
                "Midnight Glamour",
                "Navy Sophisticate",
                "Pure Elegance White",
                "Rosé Elegance Dress",
                "Sunset Glow Maxi",
            ]
        );
    }

    #[test]
    fn test_category_filter() {
        let filter = ProductFilter::new()
            .with_category(Category::Formal)
            .with_category(Category::Formal);
        assert_eq!(filter.categories.len(), 1);
        assert_eq!(ids(&filter.apply(products())), ["2", "3"]);

        let filter = filter.with_category(Category::Casual);
        assert_eq!(ids(&filter.apply(products())), ["2", "3", "5"]);
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let filter = ProductFilter::new().with_price_range(PriceRange::PRESETS[2]);
        assert_eq!(ids(&filter.apply(products())), ["2", "6", "4"]);

        let exact = PriceRange::new(Price::from_whole(189), Price::from_whole(189));
        let filter = ProductFilter::new().with_price_range(exact);
        assert_eq!(ids(&filter.apply(products())), ["1"]);
    }

    #[test]
    fn test_sort_by_price() {
        let low = ProductFilter::new()
            .with_sort(SortBy::PriceLow)
            .apply(products());
        assert_eq!(ids(&low), ["5", "1", "3", "4", "2", "6"]);

        let high = ProductFilter::new()
            .with_sort(SortBy::PriceHigh)
            .apply(products());
        assert_eq!(ids(&high), ["6", "2", "4", "3", "1", "5"]);
    }

    #[test]
    fn test_no_matches() {
        let filter = ProductFilter::new().with_price_range(PriceRange::PRESETS[0]);
        assert!(filter.apply(products()).is_empty());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut filter = ProductFilter::new()
            .with_category(Category::Summer)
            .with_sort(SortBy::PriceHigh)
            .with_price_range(PriceRange::PRESETS[3]);
        filter.clear();
        assert_eq!(filter, ProductFilter::default());
    }

    #[test]
    fn test_sort_by_parse() {
        assert_eq!("price-low".parse::<SortBy>().unwrap(), SortBy::PriceLow);
        assert_eq!(SortBy::PriceHigh.to_string(), "price-high");
        assert!("cheapest".parse::<SortBy>().is_err());
    }
}
