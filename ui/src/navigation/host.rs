//! Interactions and the navigation bookkeeping layered over the router.
//!
//! Transitions are unconditional: any request naming a known screen is pushed
//! onto the router immediately. The only failure is an unknown name, which
//! pushes nothing and is kept in `last_error` until the next accepted
//! transition so the shell can surface it.

use crate::core::RoutingError;

use super::screen::ScreenId;

/// What tapping an interactive element does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Navigate(ScreenId),
    Inert(InertReason),
}

impl Interaction {
    pub const PLACEHOLDER: Interaction = Interaction::Inert(InertReason::Placeholder);

    /// Value for the `data-inert` attribute, `None` for live elements.
    pub fn inert_marker(self) -> Option<&'static str> {
        match self {
            Interaction::Navigate(_) => None,
            Interaction::Inert(reason) => Some(reason.as_str()),
        }
    }
}

/// Why an element does nothing when tapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InertReason {
    /// The tab for the screen already on display.
    Selected,
    /// Exported without a handler; kept visible as a design placeholder.
    Placeholder,
}

impl InertReason {
    pub fn as_str(self) -> &'static str {
        match self {
            InertReason::Selected => "selected",
            InertReason::Placeholder => "placeholder",
        }
    }
}

/// Result of dispatching an [`Interaction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Navigated(ScreenId),
    Ignored(InertReason),
}

/// Bookkeeping the router does not keep: the last rejected request and a
/// transition count. The current screen itself is the router's route.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavHost {
    last_error: Option<RoutingError>,
    transitions: u64,
}

impl NavHost {
    pub fn last_error(&self) -> Option<&RoutingError> {
        self.last_error.as_ref()
    }

    /// Number of accepted transitions since construction.
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    /// Accepts a transition to `target`; the caller pushes it onto the router.
    pub fn navigate(&mut self, target: ScreenId) -> ScreenId {
        tracing::debug!(to = target.as_str(), "navigate");
        self.last_error = None;
        self.transitions += 1;
        target
    }

    /// Resolves a route name. Rejections are kept until the next accepted transition.
    pub fn request(&mut self, name: &str) -> Result<ScreenId, RoutingError> {
        match ScreenId::from_name(name) {
            Ok(target) => Ok(self.navigate(target)),
            Err(err) => {
                tracing::warn!(%err, "navigation request rejected");
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    pub fn dispatch(&mut self, interaction: Interaction) -> Dispatch {
        match interaction {
            Interaction::Navigate(target) => Dispatch::Navigated(self.navigate(target)),
            Interaction::Inert(reason) => {
                tracing::debug!(reason = reason.as_str(), "inert interaction");
                Dispatch::Ignored(reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_accepts_known_names() {
        let mut host = NavHost::default();
        assert_eq!(host.request("dashboard"), Ok(ScreenId::Dashboard {}));
        assert_eq!(host.transitions(), 1);
        assert_eq!(host.last_error(), None);
    }

    #[test]
    fn unknown_request_is_recorded_until_next_transition() {
        let mut host = NavHost::default();
        let err = host.request("settings").unwrap_err();

        assert_eq!(err, RoutingError::UnknownScreen("settings".into()));
        assert_eq!(host.last_error(), Some(&err));
        assert_eq!(host.transitions(), 0);

        host.request("chat").unwrap();
        assert_eq!(host.last_error(), None);
    }

    #[test]
    fn inert_dispatch_is_ignored() {
        let mut host = NavHost::default();
        let outcome = host.dispatch(Interaction::Inert(InertReason::Placeholder));
        assert_eq!(outcome, Dispatch::Ignored(InertReason::Placeholder));
        assert_eq!(host.transitions(), 0);
    }

    #[test]
    fn navigate_dispatch_clears_error() {
        let mut host = NavHost::default();
        let _ = host.request("");
        let outcome = host.dispatch(Interaction::Navigate(ScreenId::SocialFeed {}));
        assert_eq!(outcome, Dispatch::Navigated(ScreenId::SocialFeed {}));
        assert_eq!(host.last_error(), None);
    }
}
