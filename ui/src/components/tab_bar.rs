use dioxus::prelude::*;

use crate::navigation::{tab_bar_for, use_nav, ScreenId, TabSpec};

/// Fixed-height bottom bar for `screen`.
#[component]
pub fn TabBar(screen: ScreenId) -> Element {
    rsx! {
        nav { class: "tab-bar", aria_label: "Primary",
            for spec in tab_bar_for(screen).iter().copied() {
                TabItem { key: "{spec.label}", spec }
            }
        }
    }
}

#[component]
pub fn TabItem(spec: TabSpec) -> Element {
    let nav = use_nav();
    let class = if spec.is_selected() {
        "tab-bar__item tab-bar__item--selected"
    } else {
        "tab-bar__item"
    };

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            title: "{spec.label}",
            aria_label: "{spec.label}",
            "data-target": spec.target().map(ScreenId::as_str),
            "data-inert": spec.interaction.inert_marker(),
            onclick: move |_| {
                nav.dispatch(spec.interaction);
            },
            span { class: "tab-bar__icon", "{spec.icon}" }
        }
    }
}
