use dioxus::prelude::*;

use crate::app::ScreenFrame;
use crate::core::RoutingError;
use crate::views::{Booking, Chat, Checkout, Dashboard, Ecommerce, SignIn, SocialFeed};

/// One of the seven navigable destinations, routed at `/<name>`.
///
/// `/` redirects to the feed so a fresh web or desktop history lands on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Routable)]
#[rustfmt::skip]
pub enum ScreenId {
    #[redirect("/", || ScreenId::SocialFeed {})]
    #[layout(ScreenFrame)]
        #[route("/social_feed")]
        SocialFeed {},
        #[route("/ecommerce")]
        Ecommerce {},
        #[route("/booking")]
        Booking {},
        #[route("/checkout")]
        Checkout {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/chat")]
        Chat {},
        #[route("/sign_in")]
        SignIn {},
}

impl Default for ScreenId {
    fn default() -> Self {
        ScreenId::SocialFeed {}
    }
}

impl ScreenId {
    pub const ALL: [ScreenId; 7] = [
        ScreenId::SocialFeed {},
        ScreenId::Ecommerce {},
        ScreenId::Booking {},
        ScreenId::Checkout {},
        ScreenId::Dashboard {},
        ScreenId::Chat {},
        ScreenId::SignIn {},
    ];

    /// Resolves a bare route name such as `"sign_in"` through the router's parser.
    pub fn from_name(name: &str) -> Result<ScreenId, RoutingError> {
        let unknown = || RoutingError::UnknownScreen(name.to_string());
        if name.is_empty() || !name.bytes().all(|b| b.is_ascii_lowercase() || b == b'_') {
            return Err(unknown());
        }
        format!("/{name}").parse::<ScreenId>().map_err(|_| unknown())
    }

    /// Route name without the leading slash, e.g. `"social_feed"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ScreenId::SocialFeed {} => "social_feed",
            ScreenId::Ecommerce {} => "ecommerce",
            ScreenId::Booking {} => "booking",
            ScreenId::Checkout {} => "checkout",
            ScreenId::Dashboard {} => "dashboard",
            ScreenId::Chat {} => "chat",
            ScreenId::SignIn {} => "sign_in",
        }
    }

    /// Human label for the storyboard switcher.
    pub fn title(self) -> &'static str {
        match self {
            ScreenId::SocialFeed {} => "Social feed",
            ScreenId::Ecommerce {} => "Shop",
            ScreenId::Booking {} => "Booking",
            ScreenId::Checkout {} => "Checkout",
            ScreenId::Dashboard {} => "Dashboard",
            ScreenId::Chat {} => "Chat",
            ScreenId::SignIn {} => "Sign in",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_to_screens() {
        for screen in ScreenId::ALL {
            assert_eq!(ScreenId::from_name(screen.as_str()), Ok(screen));
            assert_eq!(screen.to_string(), format!("/{}", screen.as_str()));
        }
    }

    #[test]
    fn unknown_names_are_routing_errors() {
        assert_eq!(
            ScreenId::from_name("profile"),
            Err(RoutingError::UnknownScreen("profile".into()))
        );
        for name in ["Social_Feed", "", "chat/", "chat?x=1", "/chat", "social_feed/extra"] {
            assert!(ScreenId::from_name(name).is_err(), "{name:?} should not resolve");
        }
    }

    #[test]
    fn root_path_redirects_to_feed() {
        assert_eq!("/".parse::<ScreenId>().ok(), Some(ScreenId::SocialFeed {}));
        assert_eq!(ScreenId::default(), ScreenId::SocialFeed {});
    }
}
