//! Shopping bag commands.

use std::io::Write;

use elegance_core::ProductId;
use elegance_storefront::state::AppState;
use elegance_storefront::views::CartView;

use super::CommandError;

/// Render the bag.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn show(state: &AppState, out: &mut impl Write) -> Result<(), CommandError> {
    let view = CartView::from(state.cart());

    match view.badge() {
        Some(count) => writeln!(out, "Shopping Bag ({count})")?,
        None => writeln!(out, "Shopping Bag")?,
    }

    if view.items.is_empty() {
        writeln!(out, "Your bag is empty")?;
        return Ok(());
    }

    for line in &view.items {
        writeln!(
            out,
            "  [{}] {:<24} size {:<3} x{:<3} {:>9}",
            line.id, line.name, line.size, line.quantity, line.line_price
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Subtotal: {}", view.subtotal)?;
    writeln!(out, "Shipping and taxes calculated at checkout")?;
    Ok(())
}

/// Add one unit of a product and open the bag panel.
///
/// # Errors
///
/// Returns `AppError::NotFound` or `AppError::BadRequest` for an unknown
/// product or missing size, or a storage error if the bag cannot be saved.
pub fn add(
    state: &mut AppState,
    id: &str,
    size: Option<&str>,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let id = ProductId::new(id);
    state.add_to_cart(&id, size)?;
    state.cart_mut().open()?;

    let size = size.map(str::trim).unwrap_or_default();
    if let Some(line) = state.cart().find(&id, size) {
        writeln!(out, "Added to bag: {} ({})", line.name, line.size)?;
    }
    show(state, out)
}

/// Remove a line from the bag.
///
/// # Errors
///
/// Returns a storage error if the bag cannot be saved.
pub fn remove(
    state: &mut AppState,
    id: &str,
    size: &str,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    state.cart_mut().remove_item(&ProductId::new(id), size)?;
    show(state, out)
}

/// Set the quantity of a line.
///
/// # Errors
///
/// Returns a storage error if the bag cannot be saved.
pub fn update(
    state: &mut AppState,
    id: &str,
    size: &str,
    quantity: i64,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    state
        .cart_mut()
        .update_quantity(&ProductId::new(id), size, quantity)?;
    show(state, out)
}

/// Empty the bag.
///
/// # Errors
///
/// Returns a storage error if the bag cannot be saved.
pub fn clear(state: &mut AppState, out: &mut impl Write) -> Result<(), CommandError> {
    state.cart_mut().clear()?;
    show(state, out)
}

/// Open (`Some(true)`), close (`Some(false)`) or toggle (`None`) the bag panel.
///
/// # Errors
///
/// Returns a storage error if the bag cannot be saved.
pub fn set_panel(
    state: &mut AppState,
    open: Option<bool>,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let cart = state.cart_mut();
    match open {
        Some(true) => cart.open()?,
        Some(false) => cart.close()?,
        None => cart.toggle()?,
    }
    let label = if state.cart().is_open() { "open" } else { "closed" };
    writeln!(out, "Bag panel {label}")?;
    Ok(())
}
