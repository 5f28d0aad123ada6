//! Fixed sample data standing in for a real data source.
//!
//! Every provider is deterministic and returns a fresh `Vec` on each call.

use super::money::Money;
use super::records::{
    BookingListing, Category, ChatMessage, DashboardStat, OrderLine, OrderSummary, Post, Product,
};
use super::theme::Rgb;

pub fn sample_posts() -> Vec<Post> {
    let post = |n: u32, username: &str, group: &str, timestamp: &str, description: &str, likes, comments| Post {
        username: username.into(),
        group: group.into(),
        timestamp: timestamp.into(),
        avatar_url: format!("https://picsum.photos/100/100?random={n}"),
        image_url: format!("https://picsum.photos/400/400?random={n}"),
        description: description.into(),
        likes,
        comments,
    };

    vec![
        post(1, "Helena", "Group name", "3 min ago", "Post description", 21, 4),
        post(
            2,
            "Daniel",
            "Group Name",
            "2 hrs ago",
            "Body text for a post. Since it's a social app, sometimes it's a hot take, and sometimes it's a question.",
            6,
            18,
        ),
        post(3, "Oscar", "Group Name", "1 day ago", "Another post", 58, 5),
    ]
}

pub fn categories() -> Vec<Category> {
    (10..14)
        .map(|n| Category {
            name: "Title".into(),
            image_url: format!("https://picsum.photos/100/100?random={n}"),
        })
        .collect()
}

fn product(n: u32) -> Product {
    Product {
        name: "Product name".into(),
        brand: "Brand".into(),
        price: "10.99".into(),
        image_url: format!("https://picsum.photos/150/150?random={n}"),
    }
}

/// Products listed above the promo banner.
pub fn sample_products() -> Vec<Product> {
    (20..23).map(product).collect()
}

/// Products listed below the promo banner.
pub fn more_products() -> Vec<Product> {
    (30..33).map(product).collect()
}

pub fn sample_bookings() -> Vec<BookingListing> {
    let listing = |n: u32, name: &str, cuisine: &str, rating, location: &str, price_range: &str| BookingListing {
        name: name.into(),
        cuisine: cuisine.into(),
        location: location.into(),
        price_range: price_range.into(),
        rating,
        image_url: format!("https://picsum.photos/400/200?random={n}"),
    };

    vec![
        listing(50, "The Italian Kitchen", "Italian", 4.5, "Downtown", "$$"),
        listing(51, "Sushi Palace", "Japanese", 4.8, "Midtown", "$$$"),
        listing(52, "Burger Joint", "American", 4.2, "Uptown", "$"),
    ]
}

pub fn dashboard_stats() -> Vec<DashboardStat> {
    let stat = |title: &str, value: &str, icon: &str, color| DashboardStat {
        title: title.into(),
        value: value.into(),
        icon: icon.into(),
        color,
    };

    vec![
        stat("Revenue", "$12,345", "💰", Rgb::new(0x4C, 0xAF, 0x50)),
        stat("Users", "1,234", "👥", Rgb::new(0x21, 0x96, 0xF3)),
        stat("Orders", "567", "📦", Rgb::new(0xFF, 0x98, 0x00)),
        stat("Growth", "+23%", "📈", Rgb::new(0xE9, 0x1E, 0x63)),
    ]
}

pub fn chat_messages() -> Vec<ChatMessage> {
    let message = |n: u32, sender: &str, preview: &str, timestamp: &str, unread_count| ChatMessage {
        sender: sender.into(),
        preview: preview.into(),
        timestamp: timestamp.into(),
        avatar_url: format!("https://picsum.photos/100/100?random={n}"),
        unread_count,
    };

    vec![
        message(40, "John Doe", "Hey, how are you doing?", "2m ago", 2),
        message(41, "Jane Smith", "Thanks for the help!", "1h ago", 0),
        message(42, "Mike Johnson", "See you tomorrow", "3h ago", 1),
        message(43, "Sarah Wilson", "Great work on the project", "1d ago", 0),
    ]
}

pub fn sample_order() -> OrderSummary {
    let line = |n: u32, name: &str, cents| OrderLine {
        name: name.into(),
        price: Money::from_cents(cents),
        image_url: format!("https://picsum.photos/80/80?random={n}"),
    };

    OrderSummary {
        items: vec![
            line(60, "Wireless Headphones", 29_999),
            line(61, "Phone Case", 2_999),
        ],
        shipping: Money::from_cents(999),
        tax: Money::from_cents(2_640),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn providers_are_deterministic() {
        assert_eq!(sample_posts(), sample_posts());
        assert_eq!(categories(), categories());
        assert_eq!(sample_products(), sample_products());
        assert_eq!(more_products(), more_products());
        assert_eq!(sample_bookings(), sample_bookings());
        assert_eq!(dashboard_stats(), dashboard_stats());
        assert_eq!(chat_messages(), chat_messages());
        assert_eq!(sample_order(), sample_order());
    }

    #[test]
    fn feed_counts_match_design() {
        let posts = sample_posts();
        let likes: Vec<u32> = posts.iter().map(|p| p.likes).collect();
        let comments: Vec<u32> = posts.iter().map(|p| p.comments).collect();
        assert_eq!(likes, [21, 6, 58]);
        assert_eq!(comments, [4, 18, 5]);
    }

    #[test]
    fn product_groups_use_distinct_images() {
        let first: Vec<String> = sample_products().into_iter().map(|p| p.image_url).collect();
        let more: Vec<String> = more_products().into_iter().map(|p| p.image_url).collect();
        assert!(first.iter().all(|url| !more.contains(url)));
    }

    #[test]
    fn sample_order_totals() {
        let order = sample_order();
        assert_eq!(order.subtotal().to_string(), "$329.98");
        assert_eq!(order.shipping.to_string(), "$9.99");
        assert_eq!(order.tax.to_string(), "$26.40");
        assert_eq!(order.total().to_string(), "$366.37");
    }
}
