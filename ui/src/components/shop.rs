//! Listing-screen pieces: categories strip, product cards and the promo banner.

use dioxus::prelude::*;

use crate::core::format::format_price;
use crate::core::{Category, Product};
use crate::navigation::Interaction;

use super::{FilterChip, IconButton, RemoteImage};

#[component]
pub fn FilterSortBar() -> Element {
    rsx! {
        div { class: "filter-bar",
            FilterChip { label: "Filter" }
            FilterChip { label: "Sort" }
        }
    }
}

/// Horizontal strip of category tiles. Renders nothing when `categories` is empty.
#[component]
pub fn CategoriesRow(categories: Vec<Category>) -> Element {
    if categories.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { class: "categories",
            div { class: "categories__header",
                h2 { class: "categories__title", "Title" }
                IconButton { glyph: "〉", label: "All categories", interaction: Interaction::PLACEHOLDER }
            }
            div { class: "categories__strip",
                for (idx, category) in categories.into_iter().enumerate() {
                    CategoryItem { key: "{idx}", category }
                }
            }
        }
    }
}

#[component]
pub fn CategoryItem(category: Category) -> Element {
    rsx! {
        div { class: "category-item",
            RemoteImage { url: category.image_url.clone(), alt: category.name.clone(), class: "category-item__image" }
            span { class: "category-item__name", "{category.name}" }
        }
    }
}

#[component]
pub fn ProductCard(product: Product) -> Element {
    let price = format_price(&product.price);
    rsx! {
        article { class: "product-card",
            RemoteImage { url: product.image_url.clone(), alt: product.name.clone(), class: "product-card__image" }
            div { class: "product-card__info",
                span { class: "product-card__brand", "{product.brand}" }
                span { class: "product-card__name", "{product.name}" }
                span { class: "product-card__price", "{price}" }
            }
        }
    }
}

/// Carousel-style banner; only the first of the five pages exists.
#[component]
pub fn PromoBanner() -> Element {
    rsx! {
        div { class: "promo-banner",
            h2 { class: "promo-banner__title", "Banner title" }
            div { class: "promo-banner__dots", aria_hidden: "true",
                for page in 0..5 {
                    span { key: "{page}", class: "{dot_class(page)}" }
                }
            }
        }
    }
}

fn dot_class(page: usize) -> &'static str {
    if page == 0 {
        "promo-banner__dot promo-banner__dot--active"
    } else {
        "promo-banner__dot"
    }
}
