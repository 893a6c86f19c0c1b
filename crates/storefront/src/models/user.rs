//! User and order history types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use elegance_core::{OrderId, OrderStatus, Price, ProductId, UserId};

use super::CartItem;

/// A signed-in shopper with their order history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Most recent first.
    pub orders: Vec<Order>,
}

impl User {
    /// Create a user with an empty order history.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            orders: Vec::new(),
        }
    }
}

/// A placed order. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// When the order was placed.
    pub date: DateTime<Utc>,
    pub status: OrderStatus,
    pub total: Price,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Total number of units across all lines.
    #[must_use]
    pub fn unit_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

/// Snapshot of a purchased line, copied at purchase time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
    pub size: String,
    pub image: String,
}

impl From<&CartItem> for OrderItem {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            quantity: item.quantity,
            size: item.size.clone(),
            image: item.image.clone(),
        }
    }
}

/// Order data supplied by the caller; id and date are assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub status: OrderStatus,
    pub total: Price,
    pub items: Vec<OrderItem>,
}

impl NewOrder {
    /// Build a pending order from cart lines, totalling their prices.
    #[must_use]
    pub fn from_cart(items: &[CartItem]) -> Self {
        Self {
            status: OrderStatus::Pending,
            total: items.iter().map(CartItem::line_total).sum(),
            items: items.iter().map(OrderItem::from).collect(),
        }
    }

    /// Attach an id and timestamp.
    #[must_use]
    pub fn place(self, id: OrderId, date: DateTime<Utc>) -> Order {
        Order {
            id,
            date,
            status: self.status,
            total: self.total,
            items: self.items,
        }
    }
}
