use dioxus::prelude::*;

use crate::navigation::ScreenId;

use super::{StatusBar, TabBar};

/// Chrome shared by every screen: status bar, header, scrollable body,
/// optional pinned footer and the bottom tab bar.
#[component]
pub fn ScreenLayout(
    screen: ScreenId,
    header: Element,
    footer: Option<Element>,
    children: Element,
) -> Element {
    let name = screen.as_str();
    rsx! {
        section { class: "screen screen--{name}", "data-screen": name,
            StatusBar {}
            {header}
            div { class: "screen__content", {children} }
            if let Some(footer) = footer {
                div { class: "screen__footer", {footer} }
            }
            TabBar { screen }
        }
    }
}

/// Title row with an optional trailing element.
#[component]
pub fn ScreenHeader(#[props(into)] title: String, trailing: Option<Element>) -> Element {
    rsx! {
        header { class: "screen-header",
            h1 { class: "screen-header__title", "{title}" }
            if let Some(trailing) = trailing {
                div { class: "screen-header__trailing", {trailing} }
            }
        }
    }
}
