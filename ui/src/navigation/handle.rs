use dioxus::prelude::*;

use crate::core::RoutingError;

use super::host::{Dispatch, Interaction, NavHost};
use super::screen::ScreenId;

/// Copyable handle pairing the router's [`Navigator`] with the shell's [`NavHost`].
///
/// Components obtain it with [`use_nav`] and call it from event handlers. Every
/// accepted transition is pushed onto the router; rejected names push nothing.
#[derive(Clone, Copy)]
pub struct NavHandle {
    host: Signal<NavHost>,
    navigator: Navigator,
}

impl NavHandle {
    pub fn last_error(&self) -> Option<RoutingError> {
        self.host.read().last_error().cloned()
    }

    pub fn navigate(self, target: ScreenId) {
        let mut host = self.host;
        host.write().navigate(target);
        self.navigator.push(target);
    }

    pub fn request_screen(self, name: &str) -> Result<ScreenId, RoutingError> {
        let mut host = self.host;
        let outcome = host.write().request(name);
        let target = outcome?;
        self.navigator.push(target);
        Ok(target)
    }

    pub fn dispatch(self, interaction: Interaction) -> Dispatch {
        let mut host = self.host;
        let outcome = host.write().dispatch(interaction);
        if let Dispatch::Navigated(target) = outcome {
            self.navigator.push(target);
        }
        outcome
    }
}

/// Creates the [`NavHost`] for a shell and provides it to the routed subtree.
pub fn use_nav_host() -> Signal<NavHost> {
    let host = use_signal(NavHost::default);
    use_context_provider(|| host)
}

/// Builds the handle inside the router, where the navigator is available.
pub fn use_nav_provider() -> NavHandle {
    let host = use_context::<Signal<NavHost>>();
    use_context_provider(|| NavHandle {
        host,
        navigator: navigator(),
    })
}

pub fn use_nav() -> NavHandle {
    use_context::<NavHandle>()
}
