//! Buttons, chips and fields. Each tappable control carries an explicit
//! [`Interaction`]; the exported mock wires almost all of them to nothing.

use dioxus::prelude::*;

use crate::navigation::{use_nav, Interaction};

#[component]
pub fn ActionButton(
    #[props(into)] label: String,
    interaction: Interaction,
    #[props(into, default)] class: String,
) -> Element {
    let nav = use_nav();
    rsx! {
        button {
            r#type: "button",
            class: "button {class}",
            "data-inert": interaction.inert_marker(),
            onclick: move |_| {
                nav.dispatch(interaction);
            },
            "{label}"
        }
    }
}

/// Glyph-only button; `label` is the accessible name.
#[component]
pub fn IconButton(
    #[props(into)] glyph: String,
    #[props(into)] label: String,
    interaction: Interaction,
) -> Element {
    let nav = use_nav();
    rsx! {
        button {
            r#type: "button",
            class: "icon-button",
            aria_label: "{label}",
            "data-inert": interaction.inert_marker(),
            onclick: move |_| {
                nav.dispatch(interaction);
            },
            "{glyph}"
        }
    }
}

/// Filter / sort chip. The listing is never filtered or sorted.
#[component]
pub fn FilterChip(#[props(into)] label: String, #[props(default)] selected: bool) -> Element {
    let nav = use_nav();
    let class = if selected { "chip chip--selected" } else { "chip" };
    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            "data-inert": Interaction::PLACEHOLDER.inert_marker(),
            onclick: move |_| {
                nav.dispatch(Interaction::PLACEHOLDER);
            },
            span { class: "chip__label", "{label}" }
            span { class: "chip__caret", aria_hidden: "true", "⌄" }
        }
    }
}

#[component]
pub fn SocialButton(#[props(into)] icon: String, #[props(into)] label: String) -> Element {
    let nav = use_nav();
    rsx! {
        button {
            r#type: "button",
            class: "social-button",
            aria_label: "Continue with {label}",
            "data-inert": Interaction::PLACEHOLDER.inert_marker(),
            onclick: move |_| {
                nav.dispatch(Interaction::PLACEHOLDER);
            },
            "{icon}"
        }
    }
}

/// Unbound input. Typed text is never read, validated or submitted.
#[component]
pub fn TextField(
    #[props(into)] placeholder: String,
    #[props(into, default)] label: String,
    #[props(into, default)] leading: String,
    #[props(default)] secret: bool,
) -> Element {
    let kind = if secret { "password" } else { "text" };
    rsx! {
        label { class: "text-field",
            if !label.is_empty() {
                span { class: "text-field__label", "{label}" }
            }
            span { class: "text-field__box",
                if !leading.is_empty() {
                    span { class: "text-field__icon", aria_hidden: "true", "{leading}" }
                }
                input {
                    class: "text-field__input",
                    r#type: "{kind}",
                    placeholder: "{placeholder}",
                }
            }
        }
    }
}
