//! One composer per screen, plus the route components the router mounts.

use dioxus::prelude::*;

use crate::core::Catalog;

mod booking;
mod chat;
mod checkout;
mod dashboard;
mod ecommerce;
mod sign_in;
mod social_feed;

pub use booking::BookingScreen;
pub use chat::ChatScreen;
pub use checkout::CheckoutScreen;
pub use dashboard::DashboardScreen;
pub use ecommerce::EcommerceScreen;
pub use sign_in::SignInScreen;
pub use social_feed::SocialFeedScreen;

// Route components: each pulls its sequences from the shell's `Catalog`.

#[component]
pub fn SocialFeed() -> Element {
    let Catalog { posts, .. } = use_catalog();
    rsx! { SocialFeedScreen { posts } }
}

#[component]
pub fn Ecommerce() -> Element {
    let Catalog { categories, products, more_products, .. } = use_catalog();
    rsx! { EcommerceScreen { categories, products, more_products } }
}

#[component]
pub fn Booking() -> Element {
    let Catalog { bookings, .. } = use_catalog();
    rsx! { BookingScreen { bookings } }
}

#[component]
pub fn Checkout() -> Element {
    let Catalog { order, .. } = use_catalog();
    rsx! { CheckoutScreen { order } }
}

#[component]
pub fn Dashboard() -> Element {
    let Catalog { stats, .. } = use_catalog();
    rsx! { DashboardScreen { stats } }
}

#[component]
pub fn Chat() -> Element {
    let Catalog { messages, .. } = use_catalog();
    rsx! { ChatScreen { messages } }
}

#[component]
pub fn SignIn() -> Element {
    rsx! { SignInScreen {} }
}

fn use_catalog() -> Catalog {
    use_context::<Catalog>()
}
