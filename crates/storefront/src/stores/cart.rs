//! Shopping cart container.
//!
//! Holds the cart lines and the visibility flag of the cart panel. Lines are
//! keyed by `(product id, size)`; adding an existing key bumps its quantity
//! instead of creating a duplicate line.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use elegance_core::{Price, ProductId};

use crate::models::{CartItem, NewCartItem};
use crate::storage::{KeyValueStorage, Persisted, StorageError};

/// Storage key of the cart snapshot.
pub const CART_STORAGE_KEY: &str = "elegance-cart-storage";

/// Persisted cart state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CartState {
    pub items: Vec<CartItem>,
    pub is_open: bool,
}

/// The cart container.
#[derive(Debug)]
pub struct CartStore {
    state: Persisted<CartState>,
}

impl CartStore {
    /// Rehydrate the cart from `storage`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the snapshot cannot be read.
    pub fn load(storage: Arc<dyn KeyValueStorage>) -> Result<Self, StorageError> {
        let state: Persisted<CartState> = Persisted::load(storage, CART_STORAGE_KEY)?;
        debug!(lines = state.get().items.len(), "Cart loaded");
        Ok(Self { state })
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Cart lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.state.get().items
    }

    /// Whether the cart panel is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.get().is_open
    }

    /// Returns `true` if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Line matching `(id, size)`, if present.
    #[must_use]
    pub fn find(&self, id: &ProductId, size: &str) -> Option<&CartItem> {
        self.items().iter().find(|item| item.matches(id, size))
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items().iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of `price * quantity` across all lines.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.items().iter().map(CartItem::line_total).sum()
    }

    // =========================================================================
    // Line Mutations
    // =========================================================================

    /// Add one unit of `item`.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the snapshot cannot be written.
    pub fn add_item(&mut self, item: NewCartItem) -> Result<(), StorageError> {
        let quantity = self.state.update(|state| {
            if let Some(line) = state
                .items
                .iter_mut()
                .find(|line| line.matches(&item.id, &item.size))
            {
                line.quantity = line.quantity.saturating_add(1);
                line.quantity
            } else {
                state.items.push(item.clone().into_line());
                1
            }
        })?;

        debug!(product_id = %item.id, size = %item.size, quantity, "Cart item added");
        Ok(())
    }

    /// Remove the line matching `(id, size)`. Absent lines are ignored.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the snapshot cannot be written.
    pub fn remove_item(&mut self, id: &ProductId, size: &str) -> Result<(), StorageError> {
        let removed = self.state.update(|state| {
            let before = state.items.len();
            state.items.retain(|line| !line.matches(id, size));
            before - state.items.len()
        })?;

        debug!(product_id = %id, size, removed, "Cart item removed");
        Ok(())
    }

    /// Set the quantity of the line matching `(id, size)`.
    ///
    /// A quantity of zero or less removes the line. Quantities beyond `u32::MAX`
    /// are capped. Absent lines are ignored.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the snapshot cannot be written.
    pub fn update_quantity(
        &mut self,
        id: &ProductId,
        size: &str,
        quantity: i64,
    ) -> Result<(), StorageError> {
        if quantity <= 0 {
            return self.remove_item(id, size);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        self.state.update(|state| {
            if let Some(line) = state.items.iter_mut().find(|line| line.matches(id, size)) {
                line.quantity = quantity;
            }
        })?;

        debug!(product_id = %id, size, quantity, "Cart quantity updated");
        Ok(())
    }

    /// Remove every line.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the snapshot cannot be written.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.state.update(|state| state.items.clear())?;
        debug!("Cart cleared");
        Ok(())
    }

    /// Put back lines taken out by a failed checkout.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the snapshot cannot be written.
    pub(crate) fn restore(&mut self, items: Vec<CartItem>) -> Result<(), StorageError> {
        self.state.update(|state| state.items = items)?;
        debug!("Cart restored");
        Ok(())
    }

    // =========================================================================
    // Panel Visibility
    // =========================================================================

    /// Show the cart panel.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the snapshot cannot be written.
    pub fn open(&mut self) -> Result<(), StorageError> {
        self.set_open(true)
    }

    /// Hide the cart panel.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the snapshot cannot be written.
    pub fn close(&mut self) -> Result<(), StorageError> {
        self.set_open(false)
    }

    /// Flip the cart panel.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the snapshot cannot be written.
    pub fn toggle(&mut self) -> Result<(), StorageError> {
        self.set_open(!self.is_open())
    }

    fn set_open(&mut self, open: bool) -> Result<(), StorageError> {
        self.state.update(|state| state.is_open = open)
    }
}
