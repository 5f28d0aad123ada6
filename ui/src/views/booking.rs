use dioxus::prelude::*;

use crate::components::{BookingCard, ScreenHeader, ScreenLayout, TextField};
use crate::core::BookingListing;
use crate::navigation::ScreenId;

#[component]
pub fn BookingScreen(bookings: Vec<BookingListing>) -> Element {
    rsx! {
        ScreenLayout {
            screen: ScreenId::Booking {},
            header: rsx! {
                ScreenHeader {
                    title: "Book a Table",
                    trailing: rsx! { span { aria_hidden: "true", "📍" } },
                }
                div { class: "screen-search",
                    TextField { placeholder: "Search restaurants...", leading: "🔍" }
                }
            },
            h2 { class: "section-title", "Categories" }
            div { class: "booking-list",
                for (idx, booking) in bookings.into_iter().enumerate() {
                    BookingCard { key: "{idx}", booking }
                }
            }
        }
    }
}
