use dioxus::prelude::*;

use crate::components::{
    ActionButton, AddressCard, IconButton, OrderSummaryCard, PaymentMethodCard, ScreenHeader,
    ScreenLayout, SectionCard, TextField,
};
use crate::core::OrderSummary;
use crate::navigation::{Interaction, ScreenId};

/// Checkout. The grand total on the summary and on the order button is
/// computed from `order`, never copied from the design.
#[component]
pub fn CheckoutScreen(order: OrderSummary) -> Element {
    let place_order = format!("Place Order • {}", order.total());

    rsx! {
        ScreenLayout {
            screen: ScreenId::Checkout {},
            header: rsx! {
                ScreenHeader {
                    title: "Checkout",
                    trailing: rsx! {
                        IconButton {
                            glyph: "〈",
                            label: "Back",
                            interaction: Interaction::PLACEHOLDER,
                        }
                    },
                }
            },
            footer: rsx! {
                div { class: "checkout-footer",
                    div { class: "checkout-footer__promo",
                        TextField { placeholder: "Enter promo code" }
                        ActionButton {
                            label: "Apply",
                            interaction: Interaction::PLACEHOLDER,
                            class: "button--ghost",
                        }
                    }
                    ActionButton {
                        label: place_order,
                        interaction: Interaction::PLACEHOLDER,
                        class: "button--primary button--block button--large",
                    }
                }
            },
            SectionCard { title: "Delivery Address", AddressCard {} }
            SectionCard { title: "Payment Method", PaymentMethodCard {} }
            SectionCard { title: "Order Summary", OrderSummaryCard { order } }
        }
    }
}
