#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use dioxus::desktop::{tao::window::WindowBuilder, Config, LogicalSize};
use dioxus::prelude::*;

use ui::core::Theme;
use ui::{AppShell, PHONE_VIEWPORT};

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

fn main() {
    let (width, height) = PHONE_VIEWPORT;
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("figmademo – v{}", env!("CARGO_PKG_VERSION")))
                    .with_inner_size(LogicalSize::new(width, height)),
            ),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    let theme = use_hook(Theme::load);

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }
        AppShell { theme }
    }
}
