use dioxus::prelude::*;

use ui::core::Theme;
use ui::{AppShell, THEME_STYLESHEET};

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let theme = use_hook(Theme::load);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_STYLESHEET }
        AppShell { theme }
    }
}
