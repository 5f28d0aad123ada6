//! Snapshot of every record sequence the screens consume.

use serde::{Deserialize, Serialize};

use super::error::DataError;
use super::records::{
    BookingListing, Category, ChatMessage, DashboardStat, OrderSummary, Post, Product,
};
use super::sample;

/// All data a screen composer may draw from. Swapping the data source means
/// producing a different `Catalog`; the screens never call providers directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub posts: Vec<Post>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub more_products: Vec<Product>,
    pub bookings: Vec<BookingListing>,
    pub stats: Vec<DashboardStat>,
    pub messages: Vec<ChatMessage>,
    pub order: OrderSummary,
}

impl Catalog {
    pub fn sample() -> Self {
        Self {
            posts: sample::sample_posts(),
            categories: sample::categories(),
            products: sample::sample_products(),
            more_products: sample::more_products(),
            bookings: sample::sample_bookings(),
            stats: sample::dashboard_stats(),
            messages: sample::chat_messages(),
            order: sample::sample_order(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads a catalog document; missing sections are treated as empty.
    pub fn from_json(source: &str) -> Result<Self, DataError> {
        let catalog: Catalog = serde_json::from_str(source)?;
        tracing::debug!(
            posts = catalog.posts.len(),
            products = catalog.products.len() + catalog.more_products.len(),
            bookings = catalog.bookings.len(),
            messages = catalog.messages.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn product_count(&self) -> usize {
        self.products.len() + self.more_products.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Money;

    #[test]
    fn sample_catalog_is_stable() {
        assert_eq!(Catalog::sample(), Catalog::sample());
        assert_eq!(Catalog::sample().product_count(), 6);
    }

    #[test]
    fn partial_json_document_fills_defaults() {
        let catalog = Catalog::from_json(
            r##"{
                "messages": [{
                    "sender": "Ada",
                    "preview": "Ping",
                    "timestamp": "now",
                    "avatar_url": "",
                    "unread_count": 3
                }],
                "stats": [{ "title": "Users", "value": "9", "icon": "👥", "color": "#2196F3" }],
                "order": {
                    "items": [{ "name": "Cable", "price": "$4.50", "image_url": "" }],
                    "shipping": "1.00",
                    "tax": "$0.50"
                }
            }"##,
        )
        .unwrap();

        assert!(catalog.posts.is_empty());
        assert_eq!(catalog.messages[0].unread_count, 3);
        assert_eq!(catalog.stats[0].color.to_string(), "#2196F3");
        assert_eq!(catalog.order.total(), Money::from_cents(600));
    }

    #[test]
    fn malformed_money_is_rejected() {
        let err = Catalog::from_json(r#"{ "order": { "items": [], "shipping": "free", "tax": "0" } }"#)
            .unwrap_err();
        assert!(err.to_string().contains("invalid amount `free`"));
    }
}
