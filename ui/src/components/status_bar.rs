use dioxus::prelude::*;

#[component]
pub fn StatusBar() -> Element {
    rsx! {
        div { class: "status-bar",
            span { class: "status-bar__time", "9:41" }
            div { class: "status-bar__indicators", aria_hidden: "true",
                span { class: "status-bar__signal" }
                span { class: "status-bar__wifi" }
                span { class: "status-bar__battery" }
            }
        }
    }
}
