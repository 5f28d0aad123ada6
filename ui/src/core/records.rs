//! Immutable value records rendered by the screens.

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::theme::Rgb;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub username: String,
    pub group: String,
    pub timestamp: String,
    pub avatar_url: String,
    pub image_url: String,
    pub description: String,
    pub likes: u32,
    pub comments: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub brand: String,
    /// Decimal string without currency symbol, e.g. `"10.99"`.
    pub price: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingListing {
    pub name: String,
    pub cuisine: String,
    pub location: String,
    pub price_range: String,
    pub rating: f64,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: String,
    pub preview: String,
    pub timestamp: String,
    pub avatar_url: String,
    pub unread_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStat {
    pub title: String,
    pub value: String,
    pub icon: String,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub price: Money,
    pub image_url: String,
}

/// Checkout line items plus the fixed charges applied on top of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub items: Vec<OrderLine>,
    pub shipping: Money,
    pub tax: Money,
}

impl OrderSummary {
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|line| line.price).sum()
    }

    pub fn total(&self) -> Money {
        self.subtotal() + self.shipping + self.tax
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, cents: u64) -> OrderLine {
        OrderLine {
            name: name.into(),
            price: Money::from_cents(cents),
            image_url: String::new(),
        }
    }

    #[test]
    fn total_is_subtotal_plus_charges() {
        let order = OrderSummary {
            items: vec![line("Wireless Headphones", 29_999), line("Phone Case", 2_999)],
            shipping: Money::from_cents(999),
            tax: Money::from_cents(2_640),
        };
        assert_eq!(order.subtotal().to_string(), "$329.98");
        assert_eq!(order.total().to_string(), "$366.37");
    }

    #[test]
    fn empty_order_totals_zero() {
        let order = OrderSummary::default();
        assert_eq!(order.subtotal(), Money::ZERO);
        assert_eq!(order.total(), Money::ZERO);
    }
}
