//! State containers.
//!
//! Each store owns its state through [`Persisted`](crate::storage::Persisted),
//! so every mutation is followed by a snapshot flush under the store's fixed
//! key. Reads never touch storage.

pub mod auth;
pub mod cart;

pub use auth::{AUTH_STORAGE_KEY, AuthState, AuthStore, DEFAULT_AUTH_LATENCY};
pub use cart::{CART_STORAGE_KEY, CartState, CartStore};

use chrono::{DateTime, Utc};

/// Identifier derived from the current time in milliseconds.
///
/// If `previous` is a numeric id at or after `now`, the result is one past it,
/// so ids generated within the same millisecond stay unique and increasing.
pub(crate) fn time_derived_id(now: DateTime<Utc>, previous: Option<&str>) -> String {
    let millis = now.timestamp_millis();
    let next = previous
        .and_then(|p| p.parse::<i64>().ok())
        .filter(|&p| p >= millis)
        .map_or(millis, |p| p.saturating_add(1));
    next.to_string()
}
