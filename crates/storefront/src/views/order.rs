//! Order history views.

use chrono::{DateTime, Utc};

use crate::models::{Order, OrderItem};

/// Format a timestamp as a long US date, e.g. `October 18, 2026`.
#[must_use]
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Order line display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItemView {
    pub name: String,
    pub size: String,
    pub quantity: u32,
    pub line_price: String,
    pub image: String,
}

/// Order display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderView {
    pub id: String,
    pub date: String,
    pub status: String,
    pub total: String,
    pub items: Vec<OrderItemView>,
    /// `1 item`, `3 items`, counted by line.
    pub summary: String,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        let lines = order.items.len();
        Self {
            id: order.id.to_string(),
            date: format_date(&order.date),
            status: order.status.to_string(),
            total: order.total.to_string(),
            items: order.items.iter().map(OrderItemView::from).collect(),
            summary: format!("{lines} item{}", if lines == 1 { "" } else { "s" }),
        }
    }
}

impl From<&OrderItem> for OrderItemView {
    fn from(item: &OrderItem) -> Self {
        Self {
            name: item.name.clone(),
            size: item.size.clone(),
            quantity: item.quantity,
            line_price: (item.price * item.quantity).to_string(),
            image: item.image.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::{CartItem, NewOrder};
    use elegance_core::{OrderId, Price, ProductId};

    fn line(id: &str, quantity: u32, price: i64) -> CartItem {
        CartItem {
            id: ProductId::new(id),
            name: format!("Dress {id}"),
            price: Price::from_whole(price),
            image: String::new(),
            size: "M".to_string(),
            quantity,
        }
    }

    #[test]
    fn test_format_date() {
        let date = DateTime::parse_from_rfc3339("2026-10-08T15:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_date(&date), "October 8, 2026");
    }

    #[test]
    fn test_order_view() {
        let date = DateTime::from_timestamp(1_760_745_600, 0).unwrap();
        let order = NewOrder::from_cart(&[line("1", 2, 189), line("4", 1, 229)])
            .place(OrderId::new("1760745600000"), date);

        let view = OrderView::from(&order);
        assert_eq!(view.total, "$607.00");
        assert_eq!(view.status, "pending");
        assert_eq!(view.summary, "2 items");
        assert_eq!(view.items[0].line_price, "$378.00");
    }

    #[test]
    fn test_single_item_summary() {
        let date = DateTime::from_timestamp(0, 0).unwrap();
        let order = NewOrder::from_cart(&[line("2", 3, 249)]).place(OrderId::new("1"), date);
        assert_eq!(OrderView::from(&order).summary, "1 item");
    }
}
