use dioxus::prelude::*;

use crate::core::format::format_rating;
use crate::core::BookingListing;
use crate::navigation::Interaction;

use super::{ActionButton, RemoteImage};

#[component]
pub fn BookingCard(booking: BookingListing) -> Element {
    let rating = format_rating(booking.rating);
    rsx! {
        article { class: "booking-card card",
            RemoteImage { url: booking.image_url.clone(), alt: booking.name.clone(), class: "booking-card__image" }
            div { class: "booking-card__body",
                div { class: "booking-card__top",
                    div {
                        h3 { class: "booking-card__name", "{booking.name}" }
                        span { class: "booking-card__cuisine", "{booking.cuisine}" }
                    }
                    span { class: "booking-card__rating",
                        span { aria_hidden: "true", "⭐" }
                        "{rating}"
                    }
                }
                div { class: "booking-card__details",
                    span { class: "booking-card__location", "📍 {booking.location}" }
                    span { class: "booking-card__price", "{booking.price_range}" }
                }
                ActionButton {
                    label: "Book Now",
                    interaction: Interaction::PLACEHOLDER,
                    class: "button--primary button--block",
                }
            }
        }
    }
}
