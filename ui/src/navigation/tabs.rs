//! Bottom tab bar contents for each screen.
//!
//! Only the links the mock actually wires navigate: home on every screen and
//! the dashboard/chat shortcuts. Every other tab stays visible and is marked
//! [`InertReason::Placeholder`] instead of being wired to a guessed target.

use super::host::{InertReason, Interaction};
use super::screen::ScreenId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSpec {
    pub icon: &'static str,
    pub label: &'static str,
    pub interaction: Interaction,
}

impl TabSpec {
    const fn navigate(icon: &'static str, label: &'static str, target: ScreenId) -> Self {
        Self {
            icon,
            label,
            interaction: Interaction::Navigate(target),
        }
    }

    const fn placeholder(icon: &'static str, label: &'static str) -> Self {
        Self {
            icon,
            label,
            interaction: Interaction::Inert(InertReason::Placeholder),
        }
    }

    const fn selected(icon: &'static str, label: &'static str) -> Self {
        Self {
            icon,
            label,
            interaction: Interaction::Inert(InertReason::Selected),
        }
    }

    pub fn is_selected(&self) -> bool {
        self.interaction == Interaction::Inert(InertReason::Selected)
    }

    pub fn target(&self) -> Option<ScreenId> {
        match self.interaction {
            Interaction::Navigate(target) => Some(target),
            Interaction::Inert(_) => None,
        }
    }
}

const HOME: TabSpec = TabSpec::navigate("🏠", "Home", ScreenId::SocialFeed {});
const SEARCH: TabSpec = TabSpec::placeholder("🔍", "Search");
const NOTIFICATIONS: TabSpec = TabSpec::placeholder("🔔", "Notifications");
const PROFILE: TabSpec = TabSpec::placeholder("👤", "Profile");

const SOCIAL_FEED: [TabSpec; 5] = [
    TabSpec::selected("🏠", "Home"),
    SEARCH,
    TabSpec::placeholder("➕", "Create"),
    NOTIFICATIONS,
    PROFILE,
];

const ECOMMERCE: [TabSpec; 5] = [
    HOME,
    SEARCH,
    TabSpec::selected("🛒", "Shop"),
    NOTIFICATIONS,
    PROFILE,
];

const CHECKOUT: [TabSpec; 5] = [
    HOME,
    SEARCH,
    TabSpec::placeholder("🛒", "Shop"),
    NOTIFICATIONS,
    PROFILE,
];

const BOOKING: [TabSpec; 5] = [
    HOME,
    SEARCH,
    TabSpec::selected("📅", "Bookings"),
    NOTIFICATIONS,
    PROFILE,
];

const DASHBOARD: [TabSpec; 4] = [
    HOME,
    TabSpec::selected("📊", "Dashboard"),
    TabSpec::navigate("💬", "Messages", ScreenId::Chat {}),
    TabSpec::navigate("👤", "Account", ScreenId::SignIn {}),
];

const CHAT: [TabSpec; 4] = [
    HOME,
    TabSpec::navigate("📊", "Dashboard", ScreenId::Dashboard {}),
    TabSpec::selected("💬", "Messages"),
    TabSpec::navigate("👤", "Account", ScreenId::SignIn {}),
];

const SIGN_IN: [TabSpec; 4] = [
    HOME,
    TabSpec::placeholder("📊", "Dashboard"),
    TabSpec::placeholder("💬", "Messages"),
    TabSpec::selected("👤", "Account"),
];

pub fn tab_bar_for(screen: ScreenId) -> &'static [TabSpec] {
    match screen {
        ScreenId::SocialFeed {} => &SOCIAL_FEED,
        ScreenId::Ecommerce {} => &ECOMMERCE,
        ScreenId::Booking {} => &BOOKING,
        ScreenId::Checkout {} => &CHECKOUT,
        ScreenId::Dashboard {} => &DASHBOARD,
        ScreenId::Chat {} => &CHAT,
        ScreenId::SignIn {} => &SIGN_IN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{Dispatch, NavHost};

    #[test]
    fn every_screen_has_exactly_one_selected_tab() {
        for screen in ScreenId::ALL {
            let selected = tab_bar_for(screen).iter().filter(|t| t.is_selected()).count();
            assert_eq!(selected, 1, "{}", screen.as_str());
        }
    }

    #[test]
    fn home_tab_returns_to_feed_from_every_screen() {
        for screen in ScreenId::ALL {
            let home_tabs: Vec<&TabSpec> = tab_bar_for(screen)
                .iter()
                .filter(|t| t.target() == Some(ScreenId::SocialFeed {}))
                .collect();

            if screen != (ScreenId::SocialFeed {}) {
                assert!(!home_tabs.is_empty(), "{} has no way home", screen.as_str());
            }
            for tab in home_tabs {
                let mut host = NavHost::default();
                assert_eq!(
                    host.dispatch(tab.interaction),
                    Dispatch::Navigated(ScreenId::SocialFeed {})
                );
            }
        }
    }

    #[test]
    fn dashboard_cross_links() {
        assert_eq!(
            targets(ScreenId::Dashboard {}),
            [ScreenId::SocialFeed {}, ScreenId::Chat {}, ScreenId::SignIn {}]
        );
    }

    #[test]
    fn no_tab_navigates_to_its_own_screen() {
        for screen in ScreenId::ALL {
            assert!(tab_bar_for(screen).iter().all(|t| t.target() != Some(screen)));
        }
    }

    fn targets(screen: ScreenId) -> Vec<ScreenId> {
        tab_bar_for(screen).iter().filter_map(TabSpec::target).collect()
    }

    #[test]
    fn only_wired_links_navigate() {
        for screen in ScreenId::ALL {
            assert!(
                !targets(screen).contains(&ScreenId::Ecommerce {}),
                "{} links to the shop",
                screen.as_str()
            );
        }
        assert_eq!(targets(ScreenId::Checkout {}), [ScreenId::SocialFeed {}]);
        assert_eq!(targets(ScreenId::SignIn {}), [ScreenId::SocialFeed {}]);
        assert_eq!(
            targets(ScreenId::Chat {}),
            [ScreenId::SocialFeed {}, ScreenId::Dashboard {}, ScreenId::SignIn {}]
        );
    }
}
