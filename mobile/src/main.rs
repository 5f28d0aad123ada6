use dioxus::prelude::*;

use ui::core::Theme;
use ui::{AppShell, THEME_STYLESHEET};

fn main() {
    dioxus::launch(App);
}

/// On a phone the `max-width: 720px` rules in the theme drop the device frame
/// and leave only the jump select above the screen.
#[component]
fn App() -> Element {
    let theme = use_hook(Theme::load);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_STYLESHEET }
        AppShell { theme }
    }
}
