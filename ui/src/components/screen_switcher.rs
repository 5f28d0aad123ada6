use dioxus::prelude::*;

use crate::navigation::{use_nav, ScreenId};

/// Storyboard navbar rendered above the device frame.
///
/// The exported tab bars only link a handful of screens (the feed links none).
/// Buttons push a route directly; the `select` goes through the route name
/// lookup like any externally supplied name, and `ScreenFrame` surfaces a
/// rejected one from the host's last error.
#[component]
pub fn ScreenSwitcher() -> Element {
    let nav = use_nav();
    let current = use_route::<ScreenId>();

    let on_change = move |evt: FormEvent| {
        // Rejections are retained by the host and rendered by `ScreenFrame`.
        if let Err(err) = nav.request_screen(&evt.value()) {
            tracing::debug!(%err, "screen switcher request rejected");
        }
    };

    rsx! {
        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "figmademo" }
                    span { class: "navbar__brand-subtitle", "Mockup storyboard" }
                }

                nav { class: "navbar__links",
                    for screen in ScreenId::ALL {
                        button {
                            key: "{screen.as_str()}",
                            r#type: "button",
                            class: "{link_class(screen == current)}",
                            aria_current: (screen == current).then_some("page"),
                            onclick: move |_| nav.navigate(screen),
                            "{screen.title()}"
                        }
                    }
                }

                div { class: "navbar__jump",
                    label { class: "visually-hidden", r#for: "screen-select", "Jump to screen" }
                    select {
                        id: "screen-select",
                        value: current.as_str(),
                        oninput: on_change,
                        for screen in ScreenId::ALL {
                            option { key: "{screen.as_str()}", value: screen.as_str(), "{screen.as_str()}" }
                        }
                    }
                }
            }
        }
    }
}

fn link_class(active: bool) -> &'static str {
    if active {
        "navbar__link navbar__link--active"
    } else {
        "navbar__link"
    }
}
