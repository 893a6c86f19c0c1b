//! Browsing commands: product listing, product detail and categories.

use std::io::Write;

use elegance_core::{Category, Price, ProductId};
use elegance_storefront::catalog::{self, PriceRange, ProductFilter, SortBy};
use elegance_storefront::error::AppError;
use elegance_storefront::views::{CategoryView, ProductView};

use super::CommandError;

/// Build a filter from command-line options.
///
/// A missing bound falls back to the edge of the full price range.
pub fn filter(
    categories: Vec<Category>,
    min: Option<Price>,
    max: Option<Price>,
    sort: SortBy,
) -> ProductFilter {
    let range = PriceRange::new(
        min.unwrap_or(PriceRange::ANY.min),
        max.unwrap_or(PriceRange::ANY.max),
    );
    categories
        .into_iter()
        .fold(ProductFilter::new(), ProductFilter::with_category)
        .with_price_range(range)
        .with_sort(sort)
}

/// List the products matching `filter`.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn list(filter: &ProductFilter, out: &mut impl Write) -> Result<(), CommandError> {
    let matches = filter.apply(catalog::products());

    let heading = match filter.categories.as_slice() {
        [category] => format!("{} Dresses", category.label()),
        _ => "Shop All Dresses".to_string(),
    };
    writeln!(out, "{heading}")?;
    writeln!(
        out,
        "{} product{} found, sorted by {}",
        matches.len(),
        if matches.len() == 1 { "" } else { "s" },
        filter.sort
    )?;
    writeln!(out)?;

    if matches.is_empty() {
        writeln!(out, "No products found matching your filters")?;
        return Ok(());
    }

    for product in matches {
        let view = ProductView::from(product);
        writeln!(
            out,
            "  [{}] {:<24} {:<8} {:>9}",
            view.id, view.name, view.category, view.price
        )?;
    }
    Ok(())
}

/// List the featured collection from the landing page.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn featured(out: &mut impl Write) -> Result<(), CommandError> {
    writeln!(out, "Featured Collection")?;
    for view in catalog::featured_products().iter().map(ProductView::from) {
        writeln!(out, "  [{}] {:<24} {:>9}", view.id, view.name, view.price)?;
    }
    Ok(())
}

/// Show one product with its related products.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown id, or an error if the output
/// cannot be written.
pub fn show(id: &str, out: &mut impl Write) -> Result<(), CommandError> {
    let product = catalog::find_product(&ProductId::new(id))
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;
    let view = ProductView::from(product);

    writeln!(out, "{}", view.name)?;
    writeln!(out, "{}  ({})", view.price, view.category)?;
    writeln!(out)?;
    writeln!(out, "{}", view.description)?;
    writeln!(out)?;
    writeln!(out, "Sizes: {}", view.sizes.join(" "))?;
    writeln!(out, "Features:")?;
    for feature in &view.features {
        writeln!(out, "  - {feature}")?;
    }

    let related = catalog::related_products(product);
    if !related.is_empty() {
        writeln!(out)?;
        writeln!(out, "You may also like:")?;
        for other in related {
            writeln!(out, "  [{}] {} {}", other.id, other.name, other.price)?;
        }
    }
    Ok(())
}

/// List categories with their product counts.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn categories(out: &mut impl Write) -> Result<(), CommandError> {
    for summary in catalog::categories() {
        let view = CategoryView::from(&summary);
        writeln!(out, "  {:<8} {}", view.id, view.label)?;
    }
    Ok(())
}
