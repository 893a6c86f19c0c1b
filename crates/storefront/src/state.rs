//! Application state handed to the view layer.

use std::sync::Arc;

use elegance_core::{OrderId, ProductId};
use tracing::{error, info, warn};

use crate::catalog;
use crate::config::StorefrontConfig;
use crate::error::{AppError, Result};
use crate::models::{NewCartItem, NewOrder};
use crate::storage::{FileStorage, KeyValueStorage, StorageError};
use crate::stores::{AuthStore, CartStore};

/// Everything the views read and mutate: configuration plus both containers.
///
/// Views receive `&AppState` to render and `&mut AppState` to act; there is
/// no other route to the containers.
#[derive(Debug)]
pub struct AppState {
    config: StorefrontConfig,
    cart: CartStore,
    auth: AuthStore,
}

impl AppState {
    /// Open file-backed state under `config.storage_dir`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if an existing snapshot cannot be read.
    pub fn open(config: StorefrontConfig) -> std::result::Result<Self, StorageError> {
        let storage = Arc::new(FileStorage::new(config.storage_dir.clone()));
        Self::with_storage(config, storage)
    }

    /// Build state on top of an arbitrary storage backend.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if an existing snapshot cannot be read.
    pub fn with_storage(
        config: StorefrontConfig,
        storage: Arc<dyn KeyValueStorage>,
    ) -> std::result::Result<Self, StorageError> {
        let cart = CartStore::load(Arc::clone(&storage))?;
        let auth = AuthStore::load(storage, config.auth_latency)?;
        Ok(Self { config, cart, auth })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// The cart container.
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The cart container, for mutation.
    pub const fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// The auth container.
    #[must_use]
    pub const fn auth(&self) -> &AuthStore {
        &self.auth
    }

    /// The auth container, for mutation.
    pub const fn auth_mut(&mut self) -> &mut AuthStore {
        &mut self.auth
    }

    // =========================================================================
    // Flows
    // =========================================================================

    /// Add one unit of a catalog product in `size` to the cart.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` for an unknown product,
    /// `AppError::BadRequest` if no size was chosen or the product does not
    /// come in that size, and `AppError::Storage` if the cart cannot be saved.
    pub fn add_to_cart(&mut self, product_id: &ProductId, size: Option<&str>) -> Result<()> {
        let product = catalog::find_product(product_id)
            .ok_or_else(|| AppError::NotFound(format!("Product {product_id} not found")))?;

        let size = size
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::BadRequest("Please select a size".to_string()))?;

        if !product.has_size(size) {
            return Err(AppError::BadRequest(format!(
                "{} is not available in size {size} (choose from {})",
                product.name,
                product.sizes.join(", ")
            )));
        }

        self.cart.add_item(NewCartItem::from_product(product, size))?;
        Ok(())
    }

    /// Turn the cart into a pending order for the signed-in user.
    ///
    /// The cart is emptied before the order is recorded, and put back if
    /// recording fails, so an order is never stored while its lines remain in
    /// the cart. On success the cart panel is also closed.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Unauthorized` when nobody is signed in,
    /// `AppError::BadRequest` when the cart is empty, and `AppError::Storage`
    /// if either snapshot cannot be saved.
    pub fn checkout(&mut self) -> Result<OrderId> {
        if !self.auth.is_authenticated() {
            return Err(AppError::Unauthorized(
                "Please sign in to place an order".to_string(),
            ));
        }
        if self.cart.is_empty() {
            return Err(AppError::BadRequest("Your cart is empty".to_string()));
        }

        let lines = self.cart.items().to_vec();
        let order = NewOrder::from_cart(&lines);
        let total = order.total;

        self.cart.clear()?;

        let order_id = match self.auth.add_order(order) {
            Ok(Some(id)) => id,
            outcome => {
                if let Err(e) = self.cart.restore(lines) {
                    error!(error = %e, "Failed to restore cart after checkout failure");
                }
                return Err(match outcome {
                    Err(e) => e.into(),
                    Ok(_) => AppError::Unauthorized("Please sign in to place an order".to_string()),
                });
            }
        };

        if let Err(e) = self.cart.close() {
            warn!(error = %e, "Order placed but cart panel state not saved");
        }

        info!(order_id = %order_id, total = %total, "Checkout complete");
        Ok(order_id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use secrecy::SecretString;

    use super::*;
    use crate::storage::MemoryStorage;
    use crate::storage::testing::FailingStorage;
    use crate::stores::{AUTH_STORAGE_KEY, CART_STORAGE_KEY};
    use elegance_core::{OrderStatus, Price};

    fn state() -> AppState {
        let config = StorefrontConfig::default().with_auth_latency(Duration::ZERO);
        AppState::with_storage(config, Arc::new(MemoryStorage::new())).unwrap()
    }

    #[test]
    fn test_add_to_cart_copies_product_fields() {
        let mut state = state();
        state.add_to_cart(&ProductId::new("1"), Some("M")).unwrap();
        state.add_to_cart(&ProductId::new("1"), Some("M")).unwrap();

        let line = &state.cart().items()[0];
        assert_eq!(line.name, "Rosé Elegance Dress");
        assert_eq!(line.image, "/assets/dress-1.jpg");
        assert_eq!(line.quantity, 2);
        assert_eq!(state.cart().total_price(), Price::from_whole(378));
    }

    #[test]
    fn test_add_to_cart_requires_size() {
        let mut state = state();
        let err = state.add_to_cart(&ProductId::new("1"), None).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let err = state.add_to_cart(&ProductId::new("1"), Some("  ")).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let err = state.add_to_cart(&ProductId::new("1"), Some("XXL")).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(state.cart().is_empty());
    }

    #[test]
    fn test_add_to_cart_unknown_product() {
        let mut state = state();
        let err = state.add_to_cart(&ProductId::new("42"), Some("M")).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_checkout_requires_login() {
        let mut state = state();
        state.add_to_cart(&ProductId::new("2"), Some("S")).unwrap();

        let err = state.checkout().unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
        assert_eq!(state.cart().total_items(), 1);
    }

    #[tokio::test]
    async fn test_checkout_requires_items() {
        let mut state = state();
        state
            .auth_mut()
            .login("a@b.com", &SecretString::from("x"))
            .await
            .unwrap();

        let err = state.checkout().unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(state.auth().orders().is_empty());
    }

    #[tokio::test]
    async fn test_checkout_records_order_and_empties_cart() {
        let mut state = state();
        state
            .auth_mut()
            .login("a@b.com", &SecretString::from("x"))
            .await
            .unwrap();
        state.add_to_cart(&ProductId::new("2"), Some("S")).unwrap();
        state.add_to_cart(&ProductId::new("6"), Some("L")).unwrap();
        state.add_to_cart(&ProductId::new("6"), Some("L")).unwrap();
        state.cart_mut().open().unwrap();

        let order_id = state.checkout().unwrap();

        assert!(state.cart().is_empty());
        assert!(!state.cart().is_open());

        let order = &state.auth().orders()[0];
        assert_eq!(order.id, order_id);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total, Price::from_whole(847));
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.unit_count(), 3);
    }

    async fn signed_in_with_cart(storage: Arc<FailingStorage>) -> AppState {
        let config = StorefrontConfig::default().with_auth_latency(Duration::ZERO);
        let mut state = AppState::with_storage(config, storage).unwrap();
        state
            .auth_mut()
            .login("a@b.com", &SecretString::from("x"))
            .await
            .unwrap();
        state.add_to_cart(&ProductId::new("1"), Some("M")).unwrap();
        state
    }

    fn reopen(storage: Arc<FailingStorage>) -> AppState {
        let config = StorefrontConfig::default().with_auth_latency(Duration::ZERO);
        AppState::with_storage(config, storage).unwrap()
    }

    #[tokio::test]
    async fn test_checkout_cart_write_failure_records_nothing() {
        let storage = Arc::new(FailingStorage::new());
        let mut state = signed_in_with_cart(storage.clone()).await;

        storage.fail_writes_to(CART_STORAGE_KEY);
        let err = state.checkout().unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
        assert_eq!(state.cart().total_items(), 1);
        assert!(state.auth().orders().is_empty());

        storage.allow_writes();
        let reopened = reopen(storage);
        assert_eq!(reopened.cart().total_items(), 1);
        assert!(reopened.auth().orders().is_empty());
    }

    #[tokio::test]
    async fn test_checkout_order_write_failure_restores_cart() {
        let storage = Arc::new(FailingStorage::new());
        let mut state = signed_in_with_cart(storage.clone()).await;

        storage.fail_writes_to(AUTH_STORAGE_KEY);
        let err = state.checkout().unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
        assert_eq!(state.cart().total_items(), 1);
        assert!(state.auth().orders().is_empty());

        storage.allow_writes();
        let reopened = reopen(storage.clone());
        assert_eq!(reopened.cart().total_items(), 1);
        assert!(reopened.auth().orders().is_empty());

        // A retry places exactly one order.
        let mut state = reopened;
        state.checkout().unwrap();
        assert_eq!(reopen(storage).auth().orders().len(), 1);
    }
}
