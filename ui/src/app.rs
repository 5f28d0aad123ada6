use std::rc::Rc;

use dioxus::history::MemoryHistory;
use dioxus::prelude::*;

use crate::components::ScreenSwitcher;
use crate::core::{Catalog, Theme};
use crate::navigation::{use_nav_host, use_nav_provider, ScreenId};

/// Root of the storyboard: paints `theme`, shares `catalog` and mounts the router.
///
/// `start` names the screen to open with. A known name starts an in-memory
/// history there; an unknown one is reported like any rejected request and the
/// platform's own history is left in charge. Everything the screens need
/// arrives through this shell's props or context, so independent shells never
/// share state.
#[component]
pub fn AppShell(
    theme: Theme,
    #[props(default = Catalog::sample())] catalog: Catalog,
    start: Option<String>,
) -> Element {
    let mut host = use_nav_host();
    use_context_provider(|| catalog.clone());
    use_hook(|| {
        let Some(name) = start.as_deref() else {
            return;
        };
        if let Ok(screen) = host.write().request(name) {
            let history: Rc<dyn History> = Rc::new(MemoryHistory::with_initial_path(screen));
            provide_context(history);
        }
    });

    rsx! {
        div { class: "storyboard", style: "{theme.css_variables()}",
            Router::<ScreenId> {}
        }
    }
}

/// Layout around every route: switcher, routing error, device frame.
#[component]
pub fn ScreenFrame() -> Element {
    let nav = use_nav_provider();
    let routing_error = nav.last_error();

    rsx! {
        ScreenSwitcher {}

        if let Some(err) = routing_error {
            p { class: "storyboard__error", role: "alert", "Routing error: {err}" }
        }

        div { class: "device",
            Outlet::<ScreenId> {}
        }
    }
}
