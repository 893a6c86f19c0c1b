//! Mock authentication container.
//!
//! There is no identity backend: login and signup wait out a simulated
//! network round trip and then accept any non-empty credentials. The signed-in
//! user carries their order history, which is only ever prepended to.
//!
//! # States
//!
//! ```text
//!   anonymous --login/signup--> authenticated
//!   authenticated --logout--> anonymous
//! ```
//!
//! All mutations take `&mut self`, so a pending login cannot overlap with a
//! logout or a second login on the same store. Dropping a pending login future
//! leaves the state untouched: the user is only written after the delay.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use elegance_core::{OrderId, UserId};

use super::time_derived_id;
use crate::models::{NewOrder, Order, User};
use crate::storage::{KeyValueStorage, Persisted, StorageError};

/// Storage key of the auth snapshot.
pub const AUTH_STORAGE_KEY: &str = "elegance-auth-storage";

/// Simulated round trip for login and signup.
pub const DEFAULT_AUTH_LATENCY: Duration = Duration::from_millis(1000);

/// Id of the demo account every login signs into.
const DEMO_USER_ID: &str = "1";

/// Display name of the demo account.
const DEMO_USER_NAME: &str = "Jane Doe";

/// Persisted auth state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
}

/// The auth container.
#[derive(Debug)]
pub struct AuthStore {
    state: Persisted<AuthState>,
    latency: Duration,
}

impl AuthStore {
    /// Rehydrate the session from `storage`.
    ///
    /// `latency` is how long login and signup wait before completing.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the snapshot cannot be read.
    pub fn load(storage: Arc<dyn KeyValueStorage>, latency: Duration) -> Result<Self, StorageError> {
        let state: Persisted<AuthState> = Persisted::load(storage, AUTH_STORAGE_KEY)?;
        debug!(
            authenticated = state.get().is_authenticated,
            "Auth session loaded"
        );
        Ok(Self { state, latency })
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// The signed-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.state.get().user.as_ref()
    }

    /// Whether a user is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.get().is_authenticated
    }

    /// Order history of the signed-in user, newest first. Empty when anonymous.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        self.user()
            .map(|user| user.orders.as_slice())
            .unwrap_or_default()
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Sign in to the demo account.
    ///
    /// Returns `false` without changing state when either field is empty.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the snapshot cannot be written.
    #[instrument(skip(self, password))]
    pub async fn login(&mut self, email: &str, password: &SecretString) -> Result<bool, StorageError> {
        tokio::time::sleep(self.latency).await;

        if email.is_empty() || password.expose_secret().is_empty() {
            debug!("Login rejected: incomplete credentials");
            return Ok(false);
        }

        let user = User::new(UserId::new(DEMO_USER_ID), DEMO_USER_NAME, email);
        self.sign_in(user)?;

        info!(user_id = DEMO_USER_ID, "User logged in");
        Ok(true)
    }

    /// Create an account and sign in to it.
    ///
    /// The new user gets a time-derived id and an empty order history.
    /// Returns `false` without changing state when any field is empty.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the snapshot cannot be written.
    #[instrument(skip(self, password))]
    pub async fn signup(
        &mut self,
        name: &str,
        email: &str,
        password: &SecretString,
    ) -> Result<bool, StorageError> {
        tokio::time::sleep(self.latency).await;

        if name.is_empty() || email.is_empty() || password.expose_secret().is_empty() {
            debug!("Signup rejected: incomplete details");
            return Ok(false);
        }

        let id = UserId::new(time_derived_id(Utc::now(), None));
        let user = User::new(id.clone(), name, email);
        self.sign_in(user)?;

        info!(user_id = %id, "User signed up");
        Ok(true)
    }

    /// Sign out. Always succeeds in memory, even when already anonymous.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the snapshot cannot be written.
    pub fn logout(&mut self) -> Result<(), StorageError> {
        self.state.update(|state| {
            state.user = None;
            state.is_authenticated = false;
        })?;
        info!("User logged out");
        Ok(())
    }

    fn sign_in(&mut self, user: User) -> Result<(), StorageError> {
        self.state.update(|state| {
            state.user = Some(user);
            state.is_authenticated = true;
        })
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Record an order for the signed-in user, placing it first in the history.
    ///
    /// Returns the assigned id, or `None` (and changes nothing) when anonymous.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the snapshot cannot be written.
    pub fn add_order(&mut self, order: NewOrder) -> Result<Option<OrderId>, StorageError> {
        let Some(user) = self.user() else {
            debug!("Order ignored: no user signed in");
            return Ok(None);
        };

        let now = Utc::now();
        let previous = user.orders.first().map(|o| o.id.as_str());
        let id = OrderId::new(time_derived_id(now, previous));
        let placed = order.place(id.clone(), now);

        self.state.update(|state| {
            if let Some(user) = state.user.as_mut() {
                user.orders.insert(0, placed);
            }
        })?;

        info!(order_id = %id, "Order recorded");
        Ok(Some(id))
    }
}
