//! Checkout cards. Address and payment details are fixed copy from the mock;
//! the order summary is driven by an [`OrderSummary`] and its computed totals.

use dioxus::prelude::*;

use crate::core::{Money, OrderLine, OrderSummary};
use crate::navigation::Interaction;

use super::{IconButton, RemoteImage};

#[component]
pub fn SectionCard(#[props(into)] title: String, children: Element) -> Element {
    rsx! {
        section { class: "checkout-section",
            h2 { class: "checkout-section__title", "{title}" }
            div { class: "card", {children} }
        }
    }
}

#[component]
pub fn AddressCard() -> Element {
    rsx! {
        div { class: "detail-row",
            span { class: "detail-row__icon", aria_hidden: "true", "🏠" }
            div { class: "detail-row__text",
                span { class: "detail-row__title", "Home" }
                span { class: "detail-row__line", "123 Main Street" }
                span { class: "detail-row__line", "New York, NY 10001" }
                span { class: "detail-row__line", "United States" }
            }
            IconButton { glyph: "〉", label: "Change address", interaction: Interaction::PLACEHOLDER }
        }
    }
}

#[component]
pub fn PaymentMethodCard() -> Element {
    rsx! {
        div { class: "detail-row",
            span { class: "detail-row__badge", aria_hidden: "true", "💳" }
            div { class: "detail-row__text",
                span { class: "detail-row__title", "•••• •••• •••• 4242" }
                span { class: "detail-row__line", "Expires 12/25" }
            }
            IconButton { glyph: "〉", label: "Change payment method", interaction: Interaction::PLACEHOLDER }
        }
    }
}

#[component]
pub fn OrderSummaryCard(order: OrderSummary) -> Element {
    let subtotal = order.subtotal();
    let total = order.total();

    rsx! {
        div { class: "order-summary",
            for (idx, line) in order.items.into_iter().enumerate() {
                OrderLineRow { key: "{idx}", line }
            }
            hr { class: "order-summary__divider" }
            OrderTotalRow { label: "Subtotal", amount: subtotal }
            OrderTotalRow { label: "Shipping", amount: order.shipping }
            OrderTotalRow { label: "Tax", amount: order.tax }
            hr { class: "order-summary__divider" }
            OrderTotalRow { label: "Total", amount: total, emphasis: true }
        }
    }
}

#[component]
pub fn OrderLineRow(line: OrderLine) -> Element {
    rsx! {
        div { class: "order-line",
            RemoteImage { url: line.image_url.clone(), alt: line.name.clone(), class: "order-line__image" }
            span { class: "order-line__name", "{line.name}" }
            span { class: "order-line__price", "{line.price}" }
        }
    }
}

#[component]
pub fn OrderTotalRow(
    #[props(into)] label: String,
    amount: Money,
    #[props(default)] emphasis: bool,
) -> Element {
    let class = if emphasis {
        "order-total order-total--grand"
    } else {
        "order-total"
    };
    rsx! {
        div { class: "{class}",
            span { class: "order-total__label", "{label}" }
            span { class: "order-total__amount", "{amount}" }
        }
    }
}
